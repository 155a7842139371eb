//! Code execution capability — deterministic placeholder.
//!
//! Nothing is executed and no sandbox exists. The tool echoes back a
//! fixed text naming the requested language.

use async_trait::async_trait;
use hynicl_core::error::ToolError;
use hynicl_core::tool::{Tool, ToolResult};

pub struct CodeExecutionTool;

#[async_trait]
impl Tool for CodeExecutionTool {
    fn name(&self) -> &str {
        "code_execution"
    }

    fn description(&self) -> &str {
        "Execute a code snippet in the given language."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "code": {
                    "type": "string",
                    "description": "The code to execute"
                },
                "language": {
                    "type": "string",
                    "description": "The language of the snippet, e.g. 'python'"
                }
            },
            "required": ["code"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        arguments["code"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'code' argument".into()))?;
        let language = arguments["language"].as_str().unwrap_or("python");

        Ok(ToolResult::ok(format!(
            "Code execution result: [Simulated execution of {language} code]"
        )))
    }
}
