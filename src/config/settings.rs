//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::llm::InstructionSet;
use crate::summary::{ChunkPolicy, ModelTable};

/// Environment variables checked, in order, for the API key.
const API_KEY_ENV_VARS: [&str; 2] = ["RECAP_API_KEY", "OPENAI_API_KEY"];

const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo-0125";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// LLM provider settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Summarization settings
    #[serde(default)]
    pub summarize: SummarizeSettings,

    /// Known models and their context window sizes
    #[serde(default)]
    pub models: ModelTable,

    /// System prompts used for each model call
    #[serde(default)]
    pub instructions: InstructionSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (openai, gemini)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key
    #[serde(default)]
    pub api_key: String,

    /// Default model, must be listed in [models] (empty = provider default)
    #[serde(default)]
    pub model: String,

    /// API endpoint (empty = provider default)
    #[serde(default)]
    pub endpoint: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeSettings {
    /// File the final summary is written to
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Characters assumed per token
    #[serde(default = "default_chars_per_token")]
    pub chars_per_token: u32,

    /// Share of the context window (percent) a transcript may fill to be summarized in one call
    #[serde(default = "default_direct_percent")]
    pub direct_percent: u32,

    /// Share of the context window (percent) after which a chunk is closed
    #[serde(default = "default_chunk_percent")]
    pub chunk_percent: u32,

    /// Number of leading characters used to generate a title
    #[serde(default = "default_title_head_chars")]
    pub title_head_chars: usize,
}

// Default value functions

fn default_llm_provider() -> String {
    "openai".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_output() -> PathBuf {
    PathBuf::from("summary.md")
}

fn default_chars_per_token() -> u32 {
    4
}

fn default_direct_percent() -> u32 {
    60
}

fn default_chunk_percent() -> u32 {
    80
}

fn default_title_head_chars() -> usize {
    1000
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: String::new(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SummarizeSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            chars_per_token: default_chars_per_token(),
            direct_percent: default_direct_percent(),
            chunk_percent: default_chunk_percent(),
            title_head_chars: default_title_head_chars(),
        }
    }
}

impl LlmSettings {
    /// Configured model, or the provider's default when none is set
    pub fn model(&self) -> &str {
        let model = self.model.trim();
        if !model.is_empty() {
            return model;
        }
        match self.provider.to_lowercase().as_str() {
            "gemini" => DEFAULT_GEMINI_MODEL,
            _ => DEFAULT_OPENAI_MODEL,
        }
    }
}

impl SummarizeSettings {
    /// Chunking thresholds derived from these settings
    pub fn policy(&self) -> ChunkPolicy {
        ChunkPolicy {
            chars_per_token: self.chars_per_token,
            direct_percent: self.direct_percent,
            chunk_percent: self.chunk_percent,
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Parse settings from TOML text, filling in defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if !self.llm.api_key.trim().is_empty() {
            return;
        }

        let key = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|key| !key.trim().is_empty());

        if let Some(key) = key {
            self.llm.api_key = key;
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "recap", "recap")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
