//! TOML configuration for docchat.
//!
//! All settings have defaults, so the tool runs without a config file.
//! A file passed via `--config` (default `./config/docchat.toml`) can
//! override any of them. See `config/docchat.example.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

/// Settings for the completion API call.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// OpenAI-compatible chat-completions endpoint URL.
    #[serde(default = "default_url")]
    pub url: String,
    /// Model identifier sent in the request payload.
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}
fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}
fn default_temperature() -> f64 {
    0.3
}
fn default_max_tokens() -> u32 {
    800
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Settings for the text chunker.
#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    /// Window size in characters.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Windows whose trimmed length is at or below this are discarded.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

fn default_chunk_size() -> usize {
    400
}
fn default_min_chars() -> usize {
    50
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            min_chars: default_min_chars(),
        }
    }
}

/// Settings for chunk retrieval.
#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    /// Maximum number of chunks forwarded as context per question.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    3
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.chunking.chunk_size, 400);
        assert_eq!(cfg.chunking.min_chars, 50);
        assert_eq!(cfg.retrieval.top_k, 3);
        assert_eq!(cfg.api.model, "llama-3.3-70b-versatile");
        assert_eq!(cfg.api.max_tokens, 800);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[chunking]
chunk_size = 200

[api]
model = "mixtral-8x7b-32768"
"#,
        )
        .unwrap();
        assert_eq!(cfg.chunking.chunk_size, 200);
        assert_eq!(cfg.chunking.min_chars, 50);
        assert_eq!(cfg.api.model, "mixtral-8x7b-32768");
        assert_eq!(cfg.retrieval.top_k, 3);
    }

    #[test]
    fn test_empty_file_is_valid() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.retrieval.top_k, 3);
    }
}
