//! File edit capability — targeted text replacement.
//!
//! Replaces the first occurrence of `old_text` in the file with
//! `new_text`. If `old_text` does not appear, the file is untouched
//! and the call fails textually.

use async_trait::async_trait;
use hynicl_core::error::ToolError;
use hynicl_core::tool::{Tool, ToolResult};

pub struct FileEditTool;

#[async_trait]
impl Tool for FileEditTool {
    fn name(&self) -> &str {
        "file_edit"
    }

    fn description(&self) -> &str {
        "Replace the first occurrence of old_text with new_text in a file."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "The file path to edit"
                },
                "old_text": {
                    "type": "string",
                    "description": "The exact text to replace"
                },
                "new_text": {
                    "type": "string",
                    "description": "The replacement text"
                }
            },
            "required": ["path", "old_text", "new_text"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let path = arguments["path"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'path' argument".into()))?;
        let old_text = arguments["old_text"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'old_text' argument".into()))?;
        let new_text = arguments["new_text"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'new_text' argument".into()))?;

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                return Ok(ToolResult::fail(format!(
                    "Error: failed to read {path}: {e}"
                )));
            }
        };

        if !content.contains(old_text) {
            return Ok(ToolResult::fail(format!(
                "Error: text not found in {path}"
            )));
        }

        let edited = content.replacen(old_text, new_text, 1);
        match tokio::fs::write(path, edited).await {
            Ok(()) => Ok(ToolResult::ok(format!("Edited {path}"))),
            Err(e) => Ok(ToolResult::fail(format!(
                "Error: failed to write {path}: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replaces_first_occurrence_only() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("doc.txt");
        std::fs::write(&file_path, "alpha beta alpha").unwrap();

        let tool = FileEditTool;
        let result = tool
            .execute(serde_json::json!({
                "path": file_path.to_str().unwrap(),
                "old_text": "alpha",
                "new_text": "gamma"
            }))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(
            std::fs::read_to_string(&file_path).unwrap(),
            "gamma beta alpha"
        );
    }

    #[tokio::test]
    async fn missing_text_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("doc.txt");
        std::fs::write(&file_path, "original").unwrap();

        let tool = FileEditTool;
        let result = tool
            .execute(serde_json::json!({
                "path": file_path.to_str().unwrap(),
                "old_text": "absent",
                "new_text": "x"
            }))
            .await
            .unwrap();

        assert!(!result.success);
        assert!(result.output.contains("text not found"));
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "original");
    }

    #[tokio::test]
    async fn nonexistent_file_fails_textually() {
        let tool = FileEditTool;
        let result = tool
            .execute(serde_json::json!({
                "path": "/tmp/hynicl_test_no_such_file_5150.txt",
                "old_text": "a",
                "new_text": "b"
            }))
            .await
            .unwrap();

        assert!(!result.success);
        assert!(result.output.starts_with("Error:"));
    }

    #[tokio::test]
    async fn missing_arguments_rejected() {
        let tool = FileEditTool;
        let result = tool
            .execute(serde_json::json!({"path": "/tmp/x.txt", "old_text": "a"}))
            .await;
        assert!(result.is_err());
    }
}
