//! Tool trait — the abstraction over agent capabilities.
//!
//! Capabilities are what the agents delegate to: file I/O, a calculator,
//! a web-search stub, shared memory, and a direct bridge to the local
//! model. Each one is a pure function contract with a declared name,
//! input schema, and textual output.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::error::ToolError;

/// The result of a capability invocation.
///
/// Failures inside a capability come back as `success: false` with a
/// human-readable `output` — agents consume text, not structured errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the capability executed successfully
    pub success: bool,

    /// The textual output handed to the calling agent
    pub output: String,

    /// Optional structured data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ToolResult {
    /// A successful textual result.
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            data: None,
        }
    }

    /// A failed result, string-encoded for agent consumption.
    pub fn fail(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
            data: None,
        }
    }
}

/// The core Tool trait.
///
/// Each capability (file_read, calculator, model_query, etc.) implements
/// this trait. Tools are registered in the [`ToolRegistry`] and referenced
/// by name from agent descriptors.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this capability (e.g., "file_read").
    fn name(&self) -> &str;

    /// A description of what this capability does.
    fn description(&self) -> &str;

    /// JSON Schema describing this capability's parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the capability with the given arguments.
    async fn execute(&self, arguments: serde_json::Value)
        -> std::result::Result<ToolResult, ToolError>;
}

/// The fixed catalog of callable capabilities.
///
/// Immutable once populated: the registry must hold every capability an
/// agent descriptor references before any descriptor is constructed.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a capability. Replaces any existing one with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Get a capability by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Whether a capability with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Execute a capability by name.
    pub async fn execute(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<ToolResult, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        tool.execute(arguments).await
    }

    /// List all registered capability names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
