//! Web search capability — deterministic placeholder.
//!
//! No real network search is wired up. The tool returns a fixed,
//! query-echoing text so agent flows that reference it stay runnable.

use async_trait::async_trait;
use hynicl_core::error::ToolError;
use hynicl_core::tool::{Tool, ToolResult};

pub struct WebSearchTool;

#[async_trait]
impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search the web for information on a given query."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let query = arguments["query"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'query' argument".into()))?;

        Ok(ToolResult::ok(format!(
            "Search results for '{query}': [Simulated search results would appear here]"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_placeholder_with_query() {
        let tool = WebSearchTool;
        let result = tool
            .execute(serde_json::json!({"query": "rust async runtimes"}))
            .await
            .unwrap();

        assert!(result.success);
        assert!(result.output.contains("rust async runtimes"));
        assert!(result.output.contains("Simulated search results"));
    }

    #[tokio::test]
    async fn missing_query_rejected() {
        let tool = WebSearchTool;
        let result = tool.execute(serde_json::json!({})).await;
        assert!(result.is_err());
    }
}
