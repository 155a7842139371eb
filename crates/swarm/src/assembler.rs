//! Swarm assembly.
//!
//! Builds the five agent descriptors from the role table, checks every
//! capability reference against the registry, and verifies the local
//! model is reachable before any descriptor exists. Assembly failures
//! are fatal by design; a swarm either assembles whole or not at all.

use std::sync::Arc;

use hynicl_config::{ExecutionPolicy, PromptTable};
use hynicl_core::error::AssemblyError;
use hynicl_core::gateway::Gateway;
use hynicl_core::tool::ToolRegistry;
use tracing::info;

use crate::descriptor::{AgentDescriptor, Role, role_capabilities};
use crate::orchestrator::{ExecutionResult, Orchestrator};

/// The assembled swarm: five descriptors, the policy numbers, and the
/// orchestration engine that will run them.
pub struct Swarm {
    pub descriptors: Vec<AgentDescriptor>,
    pub policy: ExecutionPolicy,
    orchestrator: Box<dyn Orchestrator>,
}

impl std::fmt::Debug for Swarm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Swarm")
            .field("descriptors", &self.descriptors)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Swarm {
    /// Run one task to completion through the orchestration engine.
    pub async fn execute_task(&self, task: &str) -> ExecutionResult {
        self.orchestrator
            .run(&self.descriptors, &self.policy, task)
            .await
    }

    /// The shared gateway all descriptors are bound to.
    pub fn gateway(&self) -> Option<&Arc<dyn Gateway>> {
        self.descriptors.first().map(|d| &d.gateway)
    }
}

/// Assemble a swarm, verifying model reachability first.
///
/// The `list_models` probe runs before any descriptor is constructed;
/// an unreachable endpoint aborts assembly with nothing built.
pub async fn assemble(
    policy: ExecutionPolicy,
    gateway: Arc<dyn Gateway>,
    registry: &ToolRegistry,
    prompts: &PromptTable,
    orchestrator: Box<dyn Orchestrator>,
) -> Result<Swarm, AssemblyError> {
    let models = gateway
        .list_models()
        .await
        .map_err(|e| AssemblyError::ModelUnreachable {
            endpoint: gateway.endpoint().to_string(),
            reason: e.to_string(),
        })?;

    info!(
        endpoint = gateway.endpoint(),
        available = models.len(),
        "Local model reachable, assembling swarm"
    );

    let descriptors = build_descriptors(gateway, registry, prompts)?;

    Ok(Swarm {
        descriptors,
        policy,
        orchestrator,
    })
}

/// Build the five descriptors from the role table.
///
/// Pure with respect to the network: only registry and prompt lookups,
/// so it can be tested without a reachable model.
pub fn build_descriptors(
    gateway: Arc<dyn Gateway>,
    registry: &ToolRegistry,
    prompts: &PromptTable,
) -> Result<Vec<AgentDescriptor>, AssemblyError> {
    let mut descriptors = Vec::with_capacity(Role::ALL.len());

    for role in Role::ALL {
        let capabilities = role_capabilities(role);
        for capability in capabilities {
            if !registry.contains(capability) {
                return Err(AssemblyError::UnknownCapability {
                    role: role.to_string(),
                    capability: capability.to_string(),
                });
            }
        }

        let system_prompt = prompts
            .for_key(role.prompt_key())
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| AssemblyError::MissingPrompt(role.to_string()))?;

        descriptors.push(AgentDescriptor {
            role,
            system_prompt: system_prompt.to_string(),
            capabilities: capabilities.iter().map(|s| s.to_string()).collect(),
            gateway: gateway.clone(),
        });
    }

    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::SequentialOrchestrator;
    use async_trait::async_trait;
    use hynicl_core::error::GatewayError;
    use hynicl_core::message::ChatMessage;
    use hynicl_memory::SharedMemory;
    use hynicl_tools::swarm_registry;

    struct StubGateway {
        reachable: bool,
    }

    #[async_trait]
    impl Gateway for StubGateway {
        async fn generate(&self, _prompt: &str) -> Result<String, GatewayError> {
            Ok("reply".into())
        }
        async fn chat(&self, _messages: &[ChatMessage]) -> Result<String, GatewayError> {
            Ok("reply".into())
        }
        async fn list_models(&self) -> Result<Vec<String>, GatewayError> {
            if self.reachable {
                Ok(vec!["llama3.2:1b".into()])
            } else {
                Err(GatewayError::Network("connection refused".into()))
            }
        }
        fn endpoint(&self) -> &str {
            "http://localhost:11434"
        }
        fn model_id(&self) -> &str {
            "llama3.2:1b"
        }
    }

    fn full_registry(gateway: Arc<dyn Gateway>) -> ToolRegistry {
        swarm_registry(gateway, SharedMemory::new())
    }

    #[tokio::test]
    async fn assembles_five_descriptors() {
        let gateway: Arc<dyn Gateway> = Arc::new(StubGateway { reachable: true });
        let registry = full_registry(gateway.clone());

        let swarm = assemble(
            ExecutionPolicy::default(),
            gateway,
            &registry,
            &PromptTable::default(),
            Box::new(SequentialOrchestrator),
        )
        .await
        .unwrap();

        assert_eq!(swarm.descriptors.len(), 5);
        let roles: Vec<&str> = swarm.descriptors.iter().map(|d| d.role.as_str()).collect();
        assert_eq!(
            roles,
            vec!["hynicl", "search", "reasoning", "tool", "validation"]
        );
    }

    #[tokio::test]
    async fn unreachable_model_aborts_assembly() {
        let gateway: Arc<dyn Gateway> = Arc::new(StubGateway { reachable: false });
        let registry = full_registry(gateway.clone());

        let err = assemble(
            ExecutionPolicy::default(),
            gateway,
            &registry,
            &PromptTable::default(),
            Box::new(SequentialOrchestrator),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AssemblyError::ModelUnreachable { .. }));
    }

    #[tokio::test]
    async fn missing_capability_aborts_assembly() {
        let gateway: Arc<dyn Gateway> = Arc::new(StubGateway { reachable: true });
        // An empty registry resolves no capability reference
        let registry = ToolRegistry::new();

        let err = build_descriptors(gateway, &registry, &PromptTable::default()).unwrap_err();
        assert!(matches!(err, AssemblyError::UnknownCapability { .. }));
    }

    #[tokio::test]
    async fn empty_prompt_aborts_assembly() {
        let gateway: Arc<dyn Gateway> = Arc::new(StubGateway { reachable: true });
        let registry = full_registry(gateway.clone());
        let prompts = PromptTable {
            reasoning_agent_prompt: String::new(),
            ..PromptTable::default()
        };

        let err = build_descriptors(gateway, &registry, &prompts).unwrap_err();
        assert!(matches!(err, AssemblyError::MissingPrompt(role) if role == "reasoning"));
    }

    #[tokio::test]
    async fn descriptors_share_one_gateway() {
        let gateway: Arc<dyn Gateway> = Arc::new(StubGateway { reachable: true });
        let registry = full_registry(gateway.clone());

        let descriptors =
            build_descriptors(gateway.clone(), &registry, &PromptTable::default()).unwrap();
        for descriptor in &descriptors {
            assert!(Arc::ptr_eq(&descriptor.gateway, &gateway));
        }
    }

    #[tokio::test]
    async fn assembled_swarm_executes_a_task() {
        let gateway: Arc<dyn Gateway> = Arc::new(StubGateway { reachable: true });
        let registry = full_registry(gateway.clone());

        let swarm = assemble(
            ExecutionPolicy::default(),
            gateway,
            &registry,
            &PromptTable::default(),
            Box::new(SequentialOrchestrator),
        )
        .await
        .unwrap();

        let result = swarm.execute_task("What is 2+2?").await;
        assert_eq!(result.output, "reply");
        assert!(!result.node_history.is_empty());
    }
}
