//! Configuration for the tabi service.
//!
//! # Configuration Priority
//!
//! 1. Explicit config file values
//! 2. Environment variables
//! 3. Default values
//!
//! The config file is `tabi.json` in the working directory unless
//! `TABI_CONFIG` points elsewhere. A missing file is not an error; the
//! defaults describe a complete local deployment.
//!
//! # Environment Variable Mapping
//!
//! - `ANTHROPIC_API_KEY` → llm.api_key
//! - `TABI_PORT` → server.port
//! - `TABI_BIND_ADDRESS` → server.bind

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    std::env::var("TABI_CONFIG").map_or_else(|_| PathBuf::from("tabi.json"), PathBuf::from)
}

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP server binding
    #[serde(default)]
    pub server: ServerConfig,

    /// Itinerary document locations
    #[serde(default)]
    pub data: DataConfig,

    /// Completion provider settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Grounding-context settings
    #[serde(default)]
    pub context: ContextConfig,

    /// Logging settings
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// HTTP server binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address. Default: "127.0.0.1" (local only).
    /// Set to "0.0.0.0" for remote access.
    #[serde(default = "default_bind_address")]
    pub bind: String,

    /// Port number for the service.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind_address(),
            port: default_port(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".into()
}

const fn default_port() -> u16 {
    4460
}

/// Locations of the authored itinerary documents, resolved relative to the
/// working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_trip_path")]
    pub trip_path: PathBuf,

    #[serde(default = "default_hotel_path")]
    pub hotel_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            trip_path: default_trip_path(),
            hotel_path: default_hotel_path(),
        }
    }
}

fn default_trip_path() -> PathBuf {
    PathBuf::from("data/itinerary.json")
}

fn default_hotel_path() -> PathBuf {
    PathBuf::from("data/hotel-guide.json")
}

/// Completion provider settings.
///
/// Model identifier and output-token bound are deployment configuration and
/// are never taken from the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Anthropic API key. Usually supplied via `ANTHROPIC_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            base_url: default_base_url(),
            api_key: None,
        }
    }
}

fn default_model() -> String {
    "claude-3-5-sonnet-20241022".into()
}

const fn default_max_tokens() -> u32 {
    1024
}

fn default_base_url() -> String {
    "https://api.anthropic.com".into()
}

/// Grounding-context settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Date range shown when the trip document carries none.
    #[serde(default = "default_date_range")]
    pub fallback_date_range: String,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            fallback_date_range: default_date_range(),
        }
    }
}

fn default_date_range() -> String {
    "November 7 - November 11, 2025".into()
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Base log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format: "json" for structured JSON, "pretty" for human-readable.
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Config {
    /// Load the configuration from the default path, applying environment
    /// overrides on top of the file values.
    pub fn load() -> Result<Self> {
        let mut config = Self::from_file(&config_path())?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load the configuration from an explicit file path.
    ///
    /// A missing file yields the defaults; an unreadable or unparsable file
    /// is an error (a present-but-broken config should not be silently
    /// replaced).
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
            if !key.is_empty() {
                self.llm.api_key = Some(key);
            }
        }

        if let Ok(port) = std::env::var("TABI_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!(value = %port, "ignoring invalid TABI_PORT"),
            }
        }

        if let Ok(bind) = std::env::var("TABI_BIND_ADDRESS") {
            if !bind.is_empty() {
                self.server.bind = bind;
            }
        }
    }
}
