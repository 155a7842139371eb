pub mod models;
pub mod onboard;
pub mod run;
pub mod task;

use std::sync::Arc;

use hynicl_config::SwarmConfig;
use hynicl_core::gateway::Gateway;
use hynicl_gateway::OllamaGateway;
use hynicl_memory::SharedMemory;
use hynicl_swarm::{SequentialOrchestrator, Swarm, assemble};
use hynicl_tools::swarm_registry;

/// Build the gateway described by the configuration.
pub fn gateway_from(config: &SwarmConfig) -> Arc<dyn Gateway> {
    Arc::new(OllamaGateway::new(
        &config.ollama.host,
        &config.ollama.default_model,
        config.ollama.temperature,
        &config.ollama.keep_alive,
    ))
}

/// Assemble a full swarm from configuration.
///
/// Startup connectivity failure is fatal here: the caller gets the
/// assembly error with a diagnostic already printed.
pub async fn assemble_swarm(config: &SwarmConfig) -> Result<Swarm, Box<dyn std::error::Error>> {
    let gateway = gateway_from(config);
    let registry = swarm_registry(gateway.clone(), SharedMemory::new());

    match assemble(
        config.swarm.clone(),
        gateway,
        &registry,
        &config.prompts,
        Box::new(SequentialOrchestrator),
    )
    .await
    {
        Ok(swarm) => Ok(swarm),
        Err(e) => {
            eprintln!();
            eprintln!("  ERROR: could not assemble the swarm.");
            eprintln!("  {e}");
            eprintln!();
            eprintln!("  Is the local model server running at {}?", config.ollama.host);
            eprintln!("  Start it, or point HYNICL_OLLAMA_HOST somewhere else.");
            eprintln!();
            Err(Box::new(e))
        }
    }
}
