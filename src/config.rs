//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP listening port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment name, only reported at startup.
    #[serde(default = "default_app_env")]
    pub app_env: String,

    // === Storage ===
    /// JSON file holding the task collection.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_port() -> u16 {
    4000
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_data_file() -> PathBuf {
    PathBuf::from("tasks.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            app_env: default_app_env(),
            data_file: default_data_file(),
            rust_log: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be between 1 and 65535".to_string());
        }

        if self.data_file.as_os_str().is_empty() {
            return Err("DATA_FILE must not be empty".to_string());
        }

        Ok(())
    }

    /// Log filter: `rust_log`, or debug output for this crate when verbose.
    /// An unparsable `rust_log` falls back to `info`.
    pub fn log_filter(&self, verbose: bool) -> EnvFilter {
        if verbose {
            return EnvFilter::new("task_api=debug,tower_http=debug,info");
        }
        EnvFilter::try_new(&self.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}
