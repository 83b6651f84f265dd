//! Configuration management for the Roster CLI.
//!
//! Configuration is loaded from (in order of precedence):
//! 1. Command-line arguments
//! 2. The `PORT` environment variable
//! 3. Environment variables (ROSTER_*)
//! 4. Config file (~/.config/roster/config.toml)
//! 5. Default values

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use roster_core::DEFAULT_AGE_THRESHOLD;
use roster_server::DEFAULT_PORT;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Server host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable permissive CORS on the server.
    #[serde(default = "default_cors")]
    pub cors: bool,

    /// Age cutoff for the filter and demo.
    #[serde(default = "default_threshold")]
    pub threshold: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_cors() -> bool {
    true
}

fn default_threshold() -> u32 {
    DEFAULT_AGE_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: default_cors(),
            threshold: default_threshold(),
        }
    }
}

impl Config {
    /// Loads configuration from all sources.
    ///
    /// Reports warnings for configuration errors but falls back to defaults.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        match Self::figment(&config_path).extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("\x1b[33mWarning:\x1b[0m Configuration error, using defaults");
                eprintln!("  Config file: {}", config_path.display());
                eprintln!("  Error: {}", e);
                eprintln!();
                Config::default()
            }
        }
    }

    /// Builds the layered configuration sources, reading the file at `config_path`.
    pub fn figment(config_path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("ROSTER_"))
            .merge(Env::raw().only(&["PORT"]))
    }

    /// Returns the path to the config file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("roster")
            .join("config.toml")
    }
}

/// Prints the current configuration and its sources.
pub fn show_config() {
    let config = Config::load();
    let config_path = Config::config_path();

    println!("Roster Configuration");
    println!("====================\n");

    println!("Config file: {}", config_path.display());
    if config_path.exists() {
        println!("Status: Found\n");
    } else {
        println!("Status: Not found (using defaults)\n");
    }

    match toml::to_string_pretty(&config) {
        Ok(rendered) => {
            println!("Current settings:");
            for line in rendered.lines() {
                println!("  {}", line);
            }
        }
        Err(e) => eprintln!("Failed to render configuration: {}", e),
    }

    println!("\nEnvironment variables:");
    println!("  PORT");
    println!("  ROSTER_HOST");
    println!("  ROSTER_PORT");
    println!("  ROSTER_CORS");
    println!("  ROSTER_THRESHOLD");
}
