//! `hynicl task` — Run one task and exit.

use hynicl_config::SwarmConfig;
use hynicl_swarm::{ExecutionStatus, classify};

pub async fn run(task: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = SwarmConfig::load();
    let swarm = super::assemble_swarm(&config).await?;

    eprintln!("  Strategy: {}", classify(task));
    let result = swarm.execute_task(task).await;

    match result.status {
        ExecutionStatus::Completed => {
            println!("{}", result.output);
            eprintln!();
            eprintln!("  Flow: {}", result.node_history.join(" → "));
            Ok(())
        }
        ExecutionStatus::Failed => {
            eprintln!("  [Failed] {}", result.output);
            Err(result.output.into())
        }
    }
}
