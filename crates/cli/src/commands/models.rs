//! `hynicl models` — List models at the local endpoint.

use hynicl_config::SwarmConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SwarmConfig::load();
    let gateway = super::gateway_from(&config);

    let models = gateway.list_models().await.map_err(|e| {
        format!(
            "Could not reach the local model server at {}: {e}",
            config.ollama.host
        )
    })?;

    if models.is_empty() {
        println!("No models installed at {}.", config.ollama.host);
    } else {
        for model in models {
            println!("{model}");
        }
    }
    Ok(())
}
