use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles loading and validating the service configuration.
/// The configuration is read once at start-up and handed to the services
/// explicitly; nothing reads the environment at request time.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Text generation API settings
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Context generation settings
    #[serde(default)]
    pub context: ContextConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// HTTP server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the static frontend (optional)
    #[serde(default)]
    pub static_dir: Option<String>,

    /// Maximum accepted request body size
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            static_dir: None,
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

/// Anthropic service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnthropicConfig {
    /// API key for the service; empty means the service runs on local fallbacks only
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL (optional, for proxies)
    #[serde(default = "default_anthropic_endpoint")]
    pub endpoint: String,

    /// Model name (e.g., "claude-3-5-sonnet-20241022")
    #[serde(default = "default_anthropic_model")]
    pub model: String,

    /// Output token budget for a chunk translation
    #[serde(default = "default_translation_max_tokens")]
    pub translation_max_tokens: u32,

    /// Output token budget for a context block
    #[serde(default = "default_context_max_tokens")]
    pub context_max_tokens: u32,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_anthropic_endpoint(),
            model: default_anthropic_model(),
            translation_max_tokens: default_translation_max_tokens(),
            context_max_tokens: default_context_max_tokens(),
        }
    }
}

impl AnthropicConfig {
    /// Whether an API key is available
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Context generation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ContextConfig {
    /// Number of leading samples sent to the model for analysis
    #[serde(default = "default_max_samples")]
    pub max_samples: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_samples: default_max_samples(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching `log` filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Environment variable consulted at start-up for the API key
pub const API_KEY_ENV_VAR: &str = "ANTHROPIC_API_KEY";

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_body_limit_bytes() -> usize {
    50 * 1024 * 1024
}

fn default_anthropic_endpoint() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-5-sonnet-20241022".to_string()
}

fn default_translation_max_tokens() -> u32 {
    4000
}

fn default_context_max_tokens() -> u32 {
    1000
}

fn default_max_samples() -> usize {
    40
}

impl Config {
    /// Load the configuration from a JSON file, or fall back to defaults when it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Config file not found at '{}', using defaults.", path.display());
            return Ok(Self::default());
        }

        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Take the API key from the environment when one is set
    pub fn apply_env_api_key(&mut self, value: Option<String>) {
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            self.anthropic.api_key = key;
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow!("Server port must be greater than zero"));
        }

        if self.anthropic.translation_max_tokens == 0 || self.anthropic.context_max_tokens == 0 {
            return Err(anyhow!("Token budgets must be greater than zero"));
        }

        if self.context.max_samples == 0 {
            return Err(anyhow!("context.max_samples must be greater than zero"));
        }

        // A missing key is not fatal: every request degrades to local output
        if !self.anthropic.has_api_key() {
            warn!(
                "No API key configured (set {} or anthropic.api_key); responses will use local fallbacks",
                API_KEY_ENV_VAR
            );
        }

        Ok(())
    }
}
