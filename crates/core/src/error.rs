//! Error types for the Hynicl swarm domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all swarm operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Gateway errors ---
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- Swarm assembly errors ---
    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failure talking to the local model's HTTP API.
///
/// One attempt per call, so every variant maps to a single failed
/// round-trip: either the transport broke or the server answered non-2xx.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("API request failed: {message} (status: {status_code})")]
    Api { status_code: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),
}

/// Failure inside a capability.
///
/// Tool-layer failures are string-encoded before they reach an agent —
/// a missing file or a bad expression comes back as a textual
/// `ToolResult`, not as one of these. These variants cover the cases
/// where the call itself is malformed.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}

/// Fatal failure during swarm assembly.
///
/// Assembly aborts before any agent descriptor is constructed.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("Local model unreachable at {endpoint}: {reason}")]
    ModelUnreachable { endpoint: String, reason: String },

    #[error("Agent '{role}' references unregistered capability '{capability}'")]
    UnknownCapability { role: String, capability: String },

    #[error("No system prompt configured for role '{0}'")]
    MissingPrompt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_error_displays_correctly() {
        let err = Error::Gateway(GatewayError::Api {
            status_code: 500,
            message: "model not loaded".into(),
        });
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("model not loaded"));
    }

    #[test]
    fn assembly_error_displays_correctly() {
        let err = Error::Assembly(AssemblyError::UnknownCapability {
            role: "search".into(),
            capability: "teleport".into(),
        });
        assert!(err.to_string().contains("search"));
        assert!(err.to_string().contains("teleport"));
    }

    #[test]
    fn tool_error_displays_correctly() {
        let err = Error::Tool(ToolError::NotFound("calculator".into()));
        assert!(err.to_string().contains("calculator"));
    }
}
