//! # Hynicl Core
//!
//! Domain types, traits, and error definitions for the Hynicl multi-agent
//! swarm. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The seams of the system are traits defined here: the [`Gateway`] to the
//! local model and the [`Tool`] capabilities agents delegate to.
//! Implementations live in their respective crates, which keeps the
//! dependency graph pointing inward and makes every collaborator mockable
//! in tests.

pub mod error;
pub mod gateway;
pub mod message;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{AssemblyError, Error, GatewayError, Result, ToolError};
pub use gateway::Gateway;
pub use message::{ChatMessage, Role};
pub use tool::{Tool, ToolRegistry, ToolResult};
