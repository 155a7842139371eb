//! Orchestration engine seam.
//!
//! The swarm hands its descriptors and policy numbers to whatever sits
//! behind the [`Orchestrator`] trait and observes only the result: a
//! status and the ordered history of participating agents. The bundled
//! [`SequentialOrchestrator`] is a deliberately simple engine that runs
//! the strategy-derived route one agent at a time.

use async_trait::async_trait;
use hynicl_config::ExecutionPolicy;
use hynicl_core::message::ChatMessage;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::descriptor::{AgentDescriptor, Role};
use crate::strategy::{Strategy, classify};

/// Terminal status of one orchestrated task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    Completed,
    Failed,
}

/// What the orchestrator reports back for one task.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub run_id: Uuid,
    pub status: ExecutionStatus,
    /// Agent identifiers in participation order
    pub node_history: Vec<String>,
    /// Final textual output, or an `"Error: ..."` diagnostic on failure
    pub output: String,
}

/// The orchestration engine contract.
///
/// Implementations own handoff scheduling, iteration bounding, and
/// timeout enforcement; callers only supply descriptors, policy
/// numbers, and the task text.
#[async_trait]
pub trait Orchestrator: Send + Sync {
    async fn run(
        &self,
        agents: &[AgentDescriptor],
        policy: &ExecutionPolicy,
        task: &str,
    ) -> ExecutionResult;
}

/// A minimal engine: classify the task, walk the resulting agent route
/// in order, one chat round-trip per agent, each agent seeing the task
/// plus its predecessor's reply.
pub struct SequentialOrchestrator;

impl SequentialOrchestrator {
    /// The agent route implied by a strategy.
    fn route(strategy: Strategy) -> &'static [Role] {
        match strategy {
            Strategy::MultiAgentCoordination => &Role::ALL,
            Strategy::SpecialistDirect => &[Role::Hynicl],
            Strategy::AssessComplexity => &[Role::Reasoning, Role::Hynicl],
        }
    }
}

#[async_trait]
impl Orchestrator for SequentialOrchestrator {
    async fn run(
        &self,
        agents: &[AgentDescriptor],
        policy: &ExecutionPolicy,
        task: &str,
    ) -> ExecutionResult {
        let run_id = Uuid::new_v4();
        let strategy = classify(task);
        let route = Self::route(strategy);
        let hops = route.len().min(policy.max_handoffs as usize);
        let node_budget = Duration::from_secs_f64(policy.node_timeout);
        let task_budget = Duration::from_secs_f64(policy.execution_timeout);

        info!(%run_id, %strategy, agents = hops, "Executing task");

        let mut history: Vec<String> = Vec::new();
        let walk = async {
            let mut context = task.to_string();
            let mut output = String::new();
            for role in &route[..hops] {
                let Some(agent) = agents.iter().find(|a| a.role == *role) else {
                    continue;
                };
                history.push(agent.role.to_string());
                debug!(role = %agent.role, "Handing off");

                let messages = vec![
                    ChatMessage::system(&agent.system_prompt),
                    ChatMessage::user(&context),
                ];
                let reply = timeout(node_budget, agent.gateway.chat(&messages))
                    .await
                    .map_err(|_| format!("Error: agent '{}' timed out", agent.role))?
                    .map_err(|e| format!("Error: {e}"))?;

                context = format!("{task}\n\n[{}] replied:\n{reply}", agent.role);
                output = reply;
            }
            Ok::<String, String>(output)
        };

        let (status, output) = match timeout(task_budget, walk).await {
            Ok(Ok(output)) => (ExecutionStatus::Completed, output),
            Ok(Err(diagnostic)) => {
                warn!(%run_id, %diagnostic, "Task failed");
                (ExecutionStatus::Failed, diagnostic)
            }
            Err(_) => (
                ExecutionStatus::Failed,
                "Error: execution timed out".to_string(),
            ),
        };

        ExecutionResult {
            run_id,
            status,
            node_history: history,
            output,
        }
    }
}
