//! Configuration for the moodscope client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/moodscope/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod presenter;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use presenter::{FilePresenter, PresenterConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";
const DEFAULT_PREDICT_PATH: &str = "/predict";
const DEFAULT_THEME: &str = "neon";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the emotion classifier service
    pub endpoint: String,

    /// Path of the prediction route, appended to `endpoint`
    pub predict_path: String,

    /// Client-side timeout for classifier calls in seconds (0 = wait forever)
    pub request_timeout_secs: u64,

    /// Theme name: "neon", "plain"
    pub theme: String,

    /// Demo mode: score text offline instead of calling the service
    pub demo_mode: bool,

    /// Presenter behavior (counter threshold, toasts, submission policy)
    pub presenter: PresenterConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            predict_path: DEFAULT_PREDICT_PATH.to_string(),
            request_timeout_secs: 0,
            theme: DEFAULT_THEME.to_string(),
            demo_mode: false,
            presenter: PresenterConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Request timeout, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub endpoint: Option<String>,
    pub predict_path: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub theme: Option<String>,

    /// Optional [presenter] section
    pub presenter: Option<FilePresenter>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/moodscope/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("moodscope").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Config::default().to_toml() is the single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parse config file contents
    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load file config if it exists
    ///
    /// Exits the process if the config file exists but cannot be read or parsed.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::parse_file_config(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `moodscope config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::merge(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file config with an environment lookup
    pub(crate) fn merge(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Endpoint: env > file > default
        let endpoint = env("MOODSCOPE_ENDPOINT")
            .or(file.endpoint)
            .unwrap_or(defaults.endpoint);

        // Predict path: file > default
        let predict_path = file.predict_path.unwrap_or(defaults.predict_path);

        // Timeout: env > file > default (0 = none)
        let request_timeout_secs = env("MOODSCOPE_TIMEOUT")
            .and_then(|v| v.parse().ok())
            .or(file.request_timeout_secs)
            .unwrap_or(defaults.request_timeout_secs);

        // Theme: env > file > default
        let theme = env("MOODSCOPE_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Demo mode: env only (runtime flag)
        let demo_mode = env("MOODSCOPE_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            endpoint,
            predict_path,
            request_timeout_secs,
            theme,
            demo_mode,
            presenter: PresenterConfig::from_file(file.presenter),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
