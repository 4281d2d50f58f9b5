// Configuration module for reading Snake.toml
// Everything tunable about the snake lives here; the decision core takes only what it needs

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub timing: TimingConfig,
    #[serde(default)]
    pub search: SearchConfig,
    pub safety: SafetyConfig,
    pub debug: DebugConfig,
}

/// Metadata returned from GET /
#[derive(Debug, Deserialize, Clone)]
pub struct AppearanceConfig {
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
}

/// Timing and performance constants
#[derive(Debug, Deserialize, Clone)]
pub struct TimingConfig {
    pub response_time_budget_ms: u64,
    pub network_overhead_ms: u64,
}

impl TimingConfig {
    /// Computes the effective computation budget
    pub fn effective_budget_ms(&self) -> u64 {
        self.response_time_budget_ms.saturating_sub(self.network_overhead_ms)
    }
}

/// Move selection settings
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchConfig {
    /// Fixed seed for the random tie-break. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Extra rules for the immediate-safety filter
#[derive(Debug, Deserialize, Clone)]
pub struct SafetyConfig {
    pub avoid_hazards: bool,
    pub avoid_other_snakes: bool,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        SafetyConfig {
            avoid_hazards: true,
            avoid_other_snakes: false,
        }
    }
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            appearance: AppearanceConfig {
                author: "survivor-snake".to_string(),
                color: "#11ee11".to_string(),
                head: "default".to_string(),
                tail: "default".to_string(),
            },
            timing: TimingConfig {
                response_time_budget_ms: 500,
                network_overhead_ms: 100,
            },
            search: SearchConfig { seed: None },
            safety: SafetyConfig::default(),
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}
