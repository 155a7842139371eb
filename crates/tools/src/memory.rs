//! Shared memory capability — the agents' view of the swarm store.
//!
//! One `SharedMemory` instance backs every agent in a swarm, so a value
//! stored by one agent is visible to the rest.

use async_trait::async_trait;
use hynicl_core::error::ToolError;
use hynicl_core::tool::{Tool, ToolResult};
use hynicl_memory::SharedMemory;

pub struct SharedMemoryTool {
    store: SharedMemory,
}

impl SharedMemoryTool {
    pub fn new(store: SharedMemory) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for SharedMemoryTool {
    fn name(&self) -> &str {
        "memory"
    }

    fn description(&self) -> &str {
        "Store and retrieve values in the memory shared by all agents in the swarm."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "operation": {
                    "type": "string",
                    "enum": ["store", "get", "delete", "list"],
                    "description": "The memory operation to perform"
                },
                "key": {
                    "type": "string",
                    "description": "The key to operate on (store, get, delete)"
                },
                "value": {
                    "type": "string",
                    "description": "The value to store (store only)"
                }
            },
            "required": ["operation"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let operation = arguments["operation"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'operation' argument".into()))?;

        match operation {
            "store" => {
                let key = require(&arguments, "key")?;
                let value = require(&arguments, "value")?;
                self.store.store(key, value).await;
                Ok(ToolResult::ok(format!("Stored '{key}'")))
            }
            "get" => {
                let key = require(&arguments, "key")?;
                match self.store.get(key).await {
                    Some(entry) => Ok(ToolResult::ok(entry.value)),
                    None => Ok(ToolResult::fail(format!("Error: no value for '{key}'"))),
                }
            }
            "delete" => {
                let key = require(&arguments, "key")?;
                if self.store.delete(key).await {
                    Ok(ToolResult::ok(format!("Deleted '{key}'")))
                } else {
                    Ok(ToolResult::fail(format!("Error: no value for '{key}'")))
                }
            }
            "list" => {
                let keys = self.store.keys().await;
                Ok(ToolResult::ok(keys.join("\n")))
            }
            other => Err(ToolError::InvalidArguments(format!(
                "Unknown operation '{other}'"
            ))),
        }
    }
}

fn require<'a>(arguments: &'a serde_json::Value, field: &str) -> Result<&'a str, ToolError> {
    arguments[field]
        .as_str()
        .ok_or_else(|| ToolError::InvalidArguments(format!("Missing '{field}' argument")))
}
