//! Built-in capability implementations for the Hynicl swarm.
//!
//! Capabilities give agents their hands: file I/O, arithmetic, shared
//! memory, a direct line to the local model, and placeholder search and
//! code-execution surfaces. Each agent descriptor references a subset
//! of these by name; the full catalog lives in one [`ToolRegistry`].

pub mod calculator;
pub mod code_execution;
pub mod file_edit;
pub mod file_read;
pub mod file_write;
pub mod memory;
pub mod model_query;
pub mod web_search;

use std::sync::Arc;

use hynicl_core::gateway::Gateway;
use hynicl_core::tool::ToolRegistry;
use hynicl_memory::SharedMemory;

/// Build the full capability catalog for one swarm.
///
/// Every capability any agent role can reference must be registered
/// here before descriptors are constructed.
pub fn swarm_registry(gateway: Arc<dyn Gateway>, store: SharedMemory) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(calculator::CalculatorTool));
    registry.register(Box::new(code_execution::CodeExecutionTool));
    registry.register(Box::new(file_edit::FileEditTool));
    registry.register(Box::new(file_read::FileReadTool));
    registry.register(Box::new(file_write::FileWriteTool));
    registry.register(Box::new(memory::SharedMemoryTool::new(store)));
    registry.register(Box::new(model_query::ModelQueryTool::new(gateway)));
    registry.register(Box::new(web_search::WebSearchTool));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hynicl_core::error::GatewayError;
    use hynicl_core::message::ChatMessage;

    struct NullGateway;

    #[async_trait]
    impl Gateway for NullGateway {
        async fn generate(&self, _prompt: &str) -> Result<String, GatewayError> {
            Ok(String::new())
        }
        async fn chat(&self, _messages: &[ChatMessage]) -> Result<String, GatewayError> {
            Ok(String::new())
        }
        async fn list_models(&self) -> Result<Vec<String>, GatewayError> {
            Ok(Vec::new())
        }
        fn endpoint(&self) -> &str {
            "http://localhost:11434"
        }
        fn model_id(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn registry_holds_all_capabilities() {
        let registry = swarm_registry(Arc::new(NullGateway), SharedMemory::new());
        assert_eq!(
            registry.names(),
            vec![
                "calculator",
                "code_execution",
                "file_edit",
                "file_read",
                "file_write",
                "memory",
                "model_query",
                "web_search",
            ]
        );
    }
}
