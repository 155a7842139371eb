//! Swarm assembly for Hynicl.
//!
//! This crate turns configuration plus a gateway into a running swarm:
//! it classifies tasks into coordination strategies, builds the five
//! role descriptors from a data-driven table, and hands everything to
//! an orchestration engine behind the [`Orchestrator`] trait.

pub mod assembler;
pub mod descriptor;
pub mod orchestrator;
pub mod strategy;

pub use assembler::{Swarm, assemble};
pub use descriptor::{AgentDescriptor, Role, role_capabilities};
pub use orchestrator::{ExecutionResult, ExecutionStatus, Orchestrator, SequentialOrchestrator};
pub use strategy::{Strategy, classify};
