//! Agent roles and descriptors.
//!
//! Roles are configuration data, not a class hierarchy: a fixed table
//! maps each role to its prompt key and capability subset, and the
//! assembler iterates that table once to produce descriptors.

use std::fmt;
use std::sync::Arc;

use hynicl_core::gateway::Gateway;

/// The five fixed swarm roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The coordinator; decomposes tasks and synthesizes results
    Hynicl,
    Search,
    Reasoning,
    Tool,
    Validation,
}

impl Role {
    /// All roles in assembly order. The coordinator comes first.
    pub const ALL: [Role; 5] = [
        Role::Hynicl,
        Role::Search,
        Role::Reasoning,
        Role::Tool,
        Role::Validation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hynicl => "hynicl",
            Role::Search => "search",
            Role::Reasoning => "reasoning",
            Role::Tool => "tool",
            Role::Validation => "validation",
        }
    }

    /// The configuration key holding this role's system prompt.
    pub fn prompt_key(&self) -> &'static str {
        match self {
            Role::Hynicl => "hynicl_agent_prompt",
            Role::Search => "search_agent_prompt",
            Role::Reasoning => "reasoning_agent_prompt",
            Role::Tool => "tool_agent_prompt",
            Role::Validation => "validation_agent_prompt",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The capability subset each role may invoke, in declaration order.
pub fn role_capabilities(role: Role) -> &'static [&'static str] {
    match role {
        Role::Hynicl => &["web_search", "calculator", "memory", "model_query"],
        Role::Search => &["web_search", "memory", "model_query"],
        Role::Reasoning => &["memory", "calculator", "model_query"],
        Role::Tool => &[
            "file_read",
            "file_write",
            "file_edit",
            "calculator",
            "code_execution",
            "memory",
            "model_query",
        ],
        Role::Validation => &["memory", "file_read", "model_query"],
    }
}

/// One assembled agent: a role, its prompt, its capability references,
/// and the shared gateway binding.
///
/// Created once at swarm-assembly time, immutable thereafter. The
/// capability list holds names resolved against the registry during
/// assembly; descriptors never own tools or gateways.
#[derive(Clone)]
pub struct AgentDescriptor {
    pub role: Role,
    pub system_prompt: String,
    pub capabilities: Vec<String>,
    pub gateway: Arc<dyn Gateway>,
}

impl fmt::Debug for AgentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentDescriptor")
            .field("role", &self.role)
            .field("capabilities", &self.capabilities)
            .field("model", &self.gateway.model_id())
            .finish_non_exhaustive()
    }
}
