//! Model query capability — a direct bridge to the local model.
//!
//! Lets an agent issue a raw prompt to the shared gateway, outside its
//! normal conversational flow. Gateway failures come back as textual
//! results so the calling agent can read and react to them.

use std::sync::Arc;

use async_trait::async_trait;
use hynicl_core::error::ToolError;
use hynicl_core::gateway::Gateway;
use hynicl_core::message::ChatMessage;
use hynicl_core::tool::{Tool, ToolResult};
use tracing::debug;

pub struct ModelQueryTool {
    gateway: Arc<dyn Gateway>,
}

impl ModelQueryTool {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl Tool for ModelQueryTool {
    fn name(&self) -> &str {
        "model_query"
    }

    fn description(&self) -> &str {
        "Send a prompt directly to the local model and return its completion."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "The prompt to send to the model"
                },
                "use_chat": {
                    "type": "boolean",
                    "description": "Use the chat endpoint instead of plain generation"
                }
            },
            "required": ["prompt"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let prompt = arguments["prompt"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'prompt' argument".into()))?;
        let use_chat = arguments["use_chat"].as_bool().unwrap_or(false);

        debug!(model = %self.gateway.model_id(), use_chat, "Direct model query");

        let outcome = if use_chat {
            let messages = vec![ChatMessage::user(prompt)];
            self.gateway.chat(&messages).await
        } else {
            self.gateway.generate(prompt).await
        };

        match outcome {
            Ok(completion) => Ok(ToolResult::ok(completion)),
            Err(e) => Ok(ToolResult::fail(format!("Error: {e}"))),
        }
    }
}
