//! Gateway trait — the abstraction over the local model endpoint.
//!
//! The swarm talks to exactly one locally hosted model. Every agent
//! descriptor shares a single gateway instance; no descriptor owns its
//! own connection. The trait exists so tools and the orchestrator can be
//! tested against a scripted mock instead of a running model server.

use async_trait::async_trait;
use crate::error::GatewayError;
use crate::message::ChatMessage;

/// Client contract for the local model's HTTP API.
///
/// All three calls are single attempts: no retry, no backoff, no
/// streaming. The caller blocks until the round-trip completes or the
/// transport fails.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Completion-style request. Returns the model's textual completion,
    /// or an empty string if the response field is absent — this is
    /// pass-through, not validated.
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GatewayError>;

    /// Chat-style request over an ordered message history. Returns the
    /// assistant message content from the response envelope.
    async fn chat(&self, messages: &[ChatMessage]) -> std::result::Result<String, GatewayError>;

    /// List the model names the endpoint has available. Used once at
    /// startup to verify reachability; failure here is fatal to swarm
    /// assembly.
    async fn list_models(&self) -> std::result::Result<Vec<String>, GatewayError>;

    /// The endpoint this gateway is bound to, for diagnostics.
    fn endpoint(&self) -> &str;

    /// The model identifier requests are bound to.
    fn model_id(&self) -> &str;
}
