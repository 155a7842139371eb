//! `hynicl run` — Interactive swarm loop.

use hynicl_config::SwarmConfig;
use hynicl_swarm::{ExecutionStatus, Swarm, classify};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// What one line of loop input asks for. Command words are matched
/// case-insensitively; anything else is a task for the swarm.
#[derive(Debug, PartialEq, Eq)]
enum LoopCommand {
    Help,
    Agents,
    Config,
    Models,
    Quit,
    Task,
}

fn parse_command(input: &str) -> LoopCommand {
    match input.to_lowercase().as_str() {
        "help" => LoopCommand::Help,
        "agents" => LoopCommand::Agents,
        "config" => LoopCommand::Config,
        "models" => LoopCommand::Models,
        "quit" | "exit" | "q" => LoopCommand::Quit,
        _ => LoopCommand::Task,
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SwarmConfig::load();
    let swarm = super::assemble_swarm(&config).await?;
    info!(
        agents = swarm.descriptors.len(),
        model = %config.ollama.default_model,
        "Swarm assembled"
    );

    println!();
    println!("  Hynicl swarm ready.");
    println!("  Model:    {}", config.ollama.default_model);
    println!("  Endpoint: {}", config.ollama.host);
    println!("  Agents:   {}", swarm.descriptors.len());
    println!();
    println!("  Type a task, or 'help' for commands.");
    println!();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    print_prompt();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            print_prompt();
            continue;
        }
        // The task keeps its original casing; only command words fold
        match parse_command(input) {
            LoopCommand::Quit => break,
            LoopCommand::Help => print_help(),
            LoopCommand::Agents => print_agents(&swarm),
            LoopCommand::Config => print_config(&config)?,
            LoopCommand::Models => print_models(&swarm).await,
            LoopCommand::Task => execute(&swarm, input).await,
        }
        print_prompt();
    }

    println!();
    println!("  Goodbye.");
    Ok(())
}

fn print_prompt() {
    use std::io::Write;
    print!("  hynicl > ");
    let _ = std::io::stdout().flush();
}

fn print_help() {
    println!();
    println!("  Commands:");
    println!("    help    — show this help");
    println!("    agents  — list the swarm's agents and their capabilities");
    println!("    config  — show the active configuration");
    println!("    models  — list models available at the local endpoint");
    println!("    quit    — leave (also: exit, q)");
    println!();
    println!("  Anything else is treated as a task for the swarm.");
    println!();
}

fn print_agents(swarm: &Swarm) {
    println!();
    for descriptor in &swarm.descriptors {
        println!("  {:<11} {}", descriptor.role, descriptor.capabilities.join(", "));
    }
    println!();
}

fn print_config(config: &SwarmConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    let yaml = serde_yaml::to_string(config)?;
    for line in yaml.lines() {
        println!("  {line}");
    }
    Ok(())
}

async fn print_models(swarm: &Swarm) {
    println!();
    let Some(gateway) = swarm.gateway() else {
        println!("  No gateway bound.");
        return;
    };
    match gateway.list_models().await {
        Ok(models) if models.is_empty() => println!("  No models installed."),
        Ok(models) => {
            for model in models {
                println!("  {model}");
            }
        }
        Err(e) => println!("  [Error] {e}"),
    }
    println!();
}

async fn execute(swarm: &Swarm, task: &str) {
    info!(strategy = %classify(task), "Submitting task");
    println!();
    println!("  Strategy: {}", classify(task));
    eprint!("  Working...");
    let result = swarm.execute_task(task).await;
    eprint!("\r            \r");

    match result.status {
        ExecutionStatus::Completed => {
            for line in result.output.lines() {
                println!("  {line}");
            }
        }
        // Mid-task failures are reported inline; the loop keeps going
        ExecutionStatus::Failed => println!("  [Failed] {}", result.output),
    }
    println!();
    println!("  Flow: {}", result.node_history.join(" → "));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_words_match_any_casing() {
        assert_eq!(parse_command("quit"), LoopCommand::Quit);
        assert_eq!(parse_command("Quit"), LoopCommand::Quit);
        assert_eq!(parse_command("QUIT"), LoopCommand::Quit);
        assert_eq!(parse_command("Help"), LoopCommand::Help);
        assert_eq!(parse_command("AGENTS"), LoopCommand::Agents);
        assert_eq!(parse_command("Config"), LoopCommand::Config);
        assert_eq!(parse_command("Models"), LoopCommand::Models);
    }

    #[test]
    fn quit_aliases() {
        assert_eq!(parse_command("exit"), LoopCommand::Quit);
        assert_eq!(parse_command("q"), LoopCommand::Quit);
        assert_eq!(parse_command("Exit"), LoopCommand::Quit);
        assert_eq!(parse_command("Q"), LoopCommand::Quit);
    }

    #[test]
    fn free_text_is_a_task() {
        assert_eq!(parse_command("What is 2+2?"), LoopCommand::Task);
        assert_eq!(parse_command("help me plan a trip"), LoopCommand::Task);
    }
}
