//! `hynicl onboard` — First-time setup.

use hynicl_config::SwarmConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = SwarmConfig::config_path();

    println!("Hynicl — First-Time Setup");
    println!("=========================\n");

    if config_path.exists() {
        println!("Config already exists at: {}", config_path.display());
        println!("Edit it manually or delete it and re-run onboard.\n");
        return Ok(());
    }

    let config = SwarmConfig::default();
    config.persist(&config_path)?;
    println!("Created {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Make sure the local model server is running at {}", config.ollama.host);
    println!("  2. Pull a model, e.g.: ollama pull {}", config.ollama.default_model);
    println!("  3. Run: hynicl run\n");

    Ok(())
}
