//! Configuration loading, validation, and management for the Hynicl swarm.
//!
//! Loads configuration from `~/.hynicl/config.yml` with environment
//! variable overrides. If the file is absent, a default document is
//! synthesized and persisted so the next run starts from something
//! editable. Malformed configuration falls back to the synthesized
//! defaults with a logged warning — startup never fails on config.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The root configuration structure.
///
/// Maps directly to `~/.hynicl/config.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmConfig {
    /// Local model endpoint settings
    #[serde(default)]
    pub ollama: OllamaConfig,

    /// Execution policy handed to the orchestration engine
    #[serde(default)]
    pub swarm: ExecutionPolicy,

    /// Per-role system prompts
    #[serde(default, rename = "Prompt")]
    pub prompts: PromptTable,
}

/// Local model endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_model")]
    pub default_model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_keep_alive")]
    pub keep_alive: String,
}

fn default_host() -> String {
    "http://localhost:11434".into()
}
fn default_model() -> String {
    "llama3.2:1b".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_keep_alive() -> String {
    "10m".into()
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            default_model: default_model(),
            temperature: default_temperature(),
            keep_alive: default_keep_alive(),
        }
    }
}

/// Bounded execution numbers for one swarm run.
///
/// Loaded once, read-only for the process lifetime. These are handed to
/// the external orchestration engine as named parameters; nothing in this
/// codebase enforces the timeouts itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionPolicy {
    #[serde(default = "default_max_handoffs")]
    pub max_handoffs: u32,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Whole-task budget in seconds
    #[serde(default = "default_execution_timeout")]
    pub execution_timeout: f64,

    /// Per-agent budget in seconds
    #[serde(default = "default_node_timeout")]
    pub node_timeout: f64,

    /// How many recent handoffs the repetition detector looks at
    #[serde(default = "default_repetition_window")]
    pub repetitive_handoff_detection_window: u32,

    /// Minimum distinct agents expected inside that window
    #[serde(default = "default_repetition_min_unique")]
    pub repetitive_handoff_min_unique_agents: u32,
}

fn default_max_handoffs() -> u32 {
    25
}
fn default_max_iterations() -> u32 {
    30
}
fn default_execution_timeout() -> f64 {
    1200.0
}
fn default_node_timeout() -> f64 {
    300.0
}
fn default_repetition_window() -> u32 {
    8
}
fn default_repetition_min_unique() -> u32 {
    3
}

impl Default for ExecutionPolicy {
    fn default() -> Self {
        Self {
            max_handoffs: default_max_handoffs(),
            max_iterations: default_max_iterations(),
            execution_timeout: default_execution_timeout(),
            node_timeout: default_node_timeout(),
            repetitive_handoff_detection_window: default_repetition_window(),
            repetitive_handoff_min_unique_agents: default_repetition_min_unique(),
        }
    }
}

/// System prompts keyed by role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTable {
    #[serde(default = "default_hynicl_prompt")]
    pub hynicl_agent_prompt: String,

    #[serde(default = "default_search_prompt")]
    pub search_agent_prompt: String,

    #[serde(default = "default_reasoning_prompt")]
    pub reasoning_agent_prompt: String,

    #[serde(default = "default_tool_prompt")]
    pub tool_agent_prompt: String,

    #[serde(default = "default_validation_prompt")]
    pub validation_agent_prompt: String,
}

fn default_hynicl_prompt() -> String {
    "You are HYNICL, the master coordinator of a multi-agent swarm. \
     You decompose tasks, delegate to specialist agents, and synthesize \
     their results into a final answer. Hand off to a specialist whenever \
     their expertise fits the current step better than yours."
        .into()
}
fn default_search_prompt() -> String {
    "You are the SEARCH specialist. You retrieve information relevant to \
     the task, summarize what you find, and store key findings in shared \
     memory for the other agents."
        .into()
}
fn default_reasoning_prompt() -> String {
    "You are the REASONING specialist. You analyze information, work \
     through logic step by step, and use the calculator for any numeric \
     work. Explain your conclusions clearly."
        .into()
}
fn default_tool_prompt() -> String {
    "You are the TOOL specialist. You handle technical implementation: \
     reading, writing, and editing files, running computations, and \
     executing code when asked."
        .into()
}
fn default_validation_prompt() -> String {
    "You are the VALIDATION specialist. You review the work produced by \
     the other agents, check it against the original task, and report any \
     gaps or errors before the result is returned."
        .into()
}

impl Default for PromptTable {
    fn default() -> Self {
        Self {
            hynicl_agent_prompt: default_hynicl_prompt(),
            search_agent_prompt: default_search_prompt(),
            reasoning_agent_prompt: default_reasoning_prompt(),
            tool_agent_prompt: default_tool_prompt(),
            validation_agent_prompt: default_validation_prompt(),
        }
    }
}

impl PromptTable {
    /// Look up a prompt by its configuration key
    /// (e.g. `search_agent_prompt`).
    pub fn for_key(&self, key: &str) -> Option<&str> {
        match key {
            "hynicl_agent_prompt" => Some(&self.hynicl_agent_prompt),
            "search_agent_prompt" => Some(&self.search_agent_prompt),
            "reasoning_agent_prompt" => Some(&self.reasoning_agent_prompt),
            "tool_agent_prompt" => Some(&self.tool_agent_prompt),
            "validation_agent_prompt" => Some(&self.validation_agent_prompt),
            _ => None,
        }
    }
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            ollama: OllamaConfig::default(),
            swarm: ExecutionPolicy::default(),
            prompts: PromptTable::default(),
        }
    }
}

impl SwarmConfig {
    /// Load configuration from the default path (~/.hynicl/config.yml).
    ///
    /// If the file is missing, a default document is written there and
    /// returned. If it is malformed, the defaults are returned with a
    /// warning — config problems never abort startup.
    ///
    /// Environment overrides (highest priority):
    /// - `HYNICL_OLLAMA_HOST` — local model endpoint
    /// - `HYNICL_MODEL` — model identifier
    pub fn load() -> Self {
        let path = Self::config_path();
        let mut config = match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Falling back to default configuration");
                Self::default()
            }
        };

        if let Ok(host) = std::env::var("HYNICL_OLLAMA_HOST") {
            config.ollama.host = host;
        }
        if let Ok(model) = std::env::var("HYNICL_MODEL") {
            config.ollama.default_model = model;
        }

        config
    }

    /// Load configuration from a specific file path.
    ///
    /// A missing file synthesizes and persists the default document; a
    /// present-but-malformed file is an error the caller decides about.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "No config file found, writing defaults");
            let config = Self::default();
            if let Err(e) = config.persist(path) {
                warn!(error = %e, "Could not persist default config");
            }
            return Ok(config);
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Write this configuration as YAML to the given path.
    pub fn persist(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, yaml).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// The default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs_home().join(".hynicl").join("config.yml")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.ollama.temperature < 0.0 || self.ollama.temperature > 2.0 {
            return Err(ConfigError::Validation(
                "ollama.temperature must be between 0.0 and 2.0".into(),
            ));
        }
        if self.swarm.max_handoffs == 0 {
            return Err(ConfigError::Validation("swarm.max_handoffs must be > 0".into()));
        }
        if self.swarm.max_iterations == 0 {
            return Err(ConfigError::Validation("swarm.max_iterations must be > 0".into()));
        }
        if self.swarm.execution_timeout <= 0.0 {
            return Err(ConfigError::Validation(
                "swarm.execution_timeout must be > 0".into(),
            ));
        }
        if self.swarm.node_timeout <= 0.0 {
            return Err(ConfigError::Validation("swarm.node_timeout must be > 0".into()));
        }
        Ok(())
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to write config file at {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_original_numbers() {
        let config = SwarmConfig::default();
        assert_eq!(config.ollama.host, "http://localhost:11434");
        assert_eq!(config.ollama.default_model, "llama3.2:1b");
        assert_eq!(config.swarm.max_handoffs, 25);
        assert_eq!(config.swarm.max_iterations, 30);
        assert!((config.swarm.execution_timeout - 1200.0).abs() < f64::EPSILON);
        assert!((config.swarm.node_timeout - 300.0).abs() < f64::EPSILON);
        assert_eq!(config.swarm.repetitive_handoff_detection_window, 8);
        assert_eq!(config.swarm.repetitive_handoff_min_unique_agents, 3);
    }

    #[test]
    fn config_roundtrip_yaml() {
        let config = SwarmConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("Prompt:"));
        let parsed: SwarmConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.ollama.host, config.ollama.host);
        assert_eq!(parsed.swarm.max_handoffs, config.swarm.max_handoffs);
    }

    #[test]
    fn missing_file_synthesizes_and_persists_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        let config = SwarmConfig::load_from(&path).unwrap();
        assert_eq!(config.swarm.max_handoffs, 25);
        // The default document was persisted for the next run
        assert!(path.exists());
        let reloaded = SwarmConfig::load_from(&path).unwrap();
        assert_eq!(reloaded.ollama.default_model, config.ollama.default_model);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "ollama:\n  default_model: qwen2:0.5b\n").unwrap();

        let config = SwarmConfig::load_from(&path).unwrap();
        assert_eq!(config.ollama.default_model, "qwen2:0.5b");
        assert_eq!(config.ollama.host, "http://localhost:11434");
        assert_eq!(config.swarm.max_iterations, 30);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "ollama: [not a mapping").unwrap();

        let err = SwarmConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn invalid_temperature_rejected() {
        let config = SwarmConfig {
            ollama: OllamaConfig {
                temperature: 5.0,
                ..OllamaConfig::default()
            },
            ..SwarmConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_handoffs_rejected() {
        let config = SwarmConfig {
            swarm: ExecutionPolicy {
                max_handoffs: 0,
                ..ExecutionPolicy::default()
            },
            ..SwarmConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn prompt_lookup_by_key() {
        let prompts = PromptTable::default();
        assert!(prompts.for_key("hynicl_agent_prompt").is_some());
        assert!(prompts.for_key("search_agent_prompt").is_some());
        assert!(prompts.for_key("unknown_prompt").is_none());
    }

    #[test]
    fn prompt_keys_parse_from_yaml() {
        let yaml = r#"
Prompt:
  hynicl_agent_prompt: "Custom coordinator prompt"
  validation_agent_prompt: "Custom validation prompt"
"#;
        let config: SwarmConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.prompts.hynicl_agent_prompt, "Custom coordinator prompt");
        assert_eq!(config.prompts.validation_agent_prompt, "Custom validation prompt");
        // Unspecified roles keep their defaults
        assert!(config.prompts.search_agent_prompt.contains("SEARCH"));
    }
}
