//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use guryongtu_core::MachineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// File looked up when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "guryongtu.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Match pacing and randomness.
    game: GameSettings,
    /// Background picture provider.
    background: BackgroundSettings,
    /// Log output.
    logging: LoggingSettings,
}

/// Match pacing and randomness.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Seconds the round result stays on screen.
    #[serde(default = "default_result_dwell_secs")]
    result_dwell_secs: f64,

    /// Whether a key press may skip the result screen early.
    #[serde(default)]
    click_through: bool,

    /// Fixed seed for the first-player draw.
    #[serde(default)]
    seed: Option<u64>,
}

/// Background picture provider.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct BackgroundSettings {
    /// Fetch a background at startup.
    #[serde(default = "default_true")]
    enabled: bool,

    /// Astronomy Picture of the Day endpoint.
    #[serde(default = "default_endpoint")]
    endpoint: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    api_key_env: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    filter: String,
}

fn default_result_dwell_secs() -> f64 {
    3.0
}

fn default_true() -> bool {
    true
}

#[instrument]
fn default_endpoint() -> String {
    "https://api.nasa.gov/planetary/apod".to_string()
}

#[instrument]
fn default_api_key_env() -> String {
    "NASA_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("guryongtu.log")
}

#[instrument]
fn default_filter() -> String {
    "info".to_string()
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            result_dwell_secs: default_result_dwell_secs(),
            click_through: false,
            seed: None,
        }
    }
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            filter: default_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(dwell = config.game.result_dwell_secs, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the named file, or the default file when present, or defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the result dwell from the command line.
    pub fn set_result_dwell_secs(&mut self, secs: f64) -> Result<(), ConfigError> {
        self.game.result_dwell_secs = secs;
        self.validate()
    }

    /// Forces click-through on.
    pub fn enable_click_through(&mut self) {
        self.game.click_through = true;
    }

    /// Overrides the first-player seed.
    pub fn set_seed(&mut self, seed: u64) {
        self.game.seed = Some(seed);
    }

    /// Turns the background fetch off.
    pub fn disable_background(&mut self) {
        self.background.enabled = false;
    }

    /// Builds the phase machine configuration.
    pub fn machine_config(&self) -> Result<MachineConfig, ConfigError> {
        let dwell = Duration::try_from_secs_f64(self.game.result_dwell_secs).map_err(|e| {
            ConfigError::new(format!(
                "Invalid result_dwell_secs {}: {}",
                self.game.result_dwell_secs, e
            ))
        })?;
        Ok(MachineConfig::default()
            .with_result_dwell(dwell)
            .with_click_through(self.game.click_through))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.machine_config().map(|_| ())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
