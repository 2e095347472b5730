//! Configuration module for the dummy AI library
//!
//! Behaviour that the real library would pick up from the process
//! environment is carried in a `DummyConfig` value instead, so the engine
//! itself never touches global state. Sources:
//! - Environment variables (`DUMMY_AI_*`)
//! - YAML/TOML/JSON config files (CLI only)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DummyError, DummyResult};

/// Presence forces every send to report the simulated HTTP failure
pub const ENV_EXPECT_ERROR: &str = "DUMMY_AI_EXPECT_ERROR";
/// `quoted` or `raw`
pub const ENV_PROMPT_ESCAPING: &str = "DUMMY_AI_PROMPT_ESCAPING";
/// Filter directive for logging from the C surface
pub const ENV_LOG: &str = "DUMMY_AI_LOG";
/// Config file consumed by the CLI
pub const ENV_CONFIG: &str = "DUMMY_AI_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DummyConfig {
    /// Simulate a transport failure on send
    pub expect_error: bool,
    /// How the prompt is embedded into the response body
    pub prompt_escaping: PromptEscaping,
    /// Telemetry settings
    pub telemetry: TelemetryConfig,
}

/// Prompt embedding mode.
///
/// The two historical mock builds disagreed here: one emitted a properly
/// escaped string, the other pasted the prompt between quotes verbatim.
/// Both are kept and chosen explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptEscaping {
    /// JSON string literal; the body is always valid JSON
    #[default]
    Quoted,
    /// Verbatim between double quotes; may produce invalid JSON
    Raw,
}

impl std::fmt::Display for PromptEscaping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quoted => write!(f, "quoted"),
            Self::Raw => write!(f, "raw"),
        }
    }
}

impl std::str::FromStr for PromptEscaping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quoted" | "escaped" => Ok(Self::Quoted),
            "raw" => Ok(Self::Raw),
            _ => Err(format!("Unknown prompt escaping mode: {}", s)),
        }
    }
}

impl DummyConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> DummyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DummyError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| DummyError::Config(format!("YAML parse error: {}", e)))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| DummyError::Config(format!("TOML parse error: {}", e)))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| DummyError::Config(format!("JSON parse error: {}", e)))?,
            _ => return Err(DummyError::Config(
                "Unsupported config file format. Use .yaml, .toml, or .json".to_string()
            )),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the process environment
    pub fn from_env() -> DummyResult<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))?;
        Ok(config)
    }

    /// Overlay environment settings read through `lookup`.
    ///
    /// `DUMMY_AI_EXPECT_ERROR` is presence-checked; an empty value still
    /// counts as set.
    pub fn apply_env<F>(&mut self, lookup: F) -> DummyResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if lookup(ENV_EXPECT_ERROR).is_some() {
            self.expect_error = true;
        }

        if let Some(mode) = lookup(ENV_PROMPT_ESCAPING) {
            self.prompt_escaping = mode.parse().map_err(|e: String| DummyError::Validation {
                message: e,
                param: Some(ENV_PROMPT_ESCAPING.to_string()),
            })?;
        }

        if let Some(level) = lookup(ENV_LOG).filter(|l| !l.trim().is_empty()) {
            self.telemetry.enabled = true;
            self.telemetry.log_level = level;
        }

        self.validate()
    }

    /// Validate the configuration
    pub fn validate(&self) -> DummyResult<()> {
        self.telemetry.validate()
    }

    /// Configuration that forces the simulated failure
    pub fn failing() -> Self {
        Self {
            expect_error: true,
            ..Default::default()
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Enable telemetry
    pub enabled: bool,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// Enable JSON logging
    pub json_logs: bool,
    /// Service name attached to the startup event
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_level: "info".to_string(),
            json_logs: false,
            service_name: "rjsjai-dummy".to_string(),
        }
    }
}

impl TelemetryConfig {
    pub fn validate(&self) -> DummyResult<()> {
        if self.log_level.trim().is_empty() {
            return Err(DummyError::Validation {
                message: "log_level cannot be empty".to_string(),
                param: Some("telemetry.log_level".to_string()),
            });
        }
        Ok(())
    }
}
