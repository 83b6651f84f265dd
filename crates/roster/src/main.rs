//! # Roster CLI
//!
//! Command-line entry point: serves the user listing API and runs the
//! age-filter demo.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "roster")]
#[command(author = "Daemoniorum Engineering")]
#[command(version)]
#[command(about = "User listing service and age-filter demo", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the user listing server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to listen on (defaults to $PORT, then 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Disable CORS headers
        #[arg(long)]
        no_cors: bool,
    },

    /// Print the names of people older than the threshold
    Filter {
        /// JSON file holding an array of {id, name, age}; the demo people when omitted
        file: Option<PathBuf>,

        /// Age cutoff (exclusive)
        #[arg(short, long)]
        threshold: Option<u32>,
    },

    /// Start the interactive age-filter demo
    Demo {
        /// Age cutoff (exclusive)
        #[arg(short, long)]
        threshold: Option<u32>,

        /// Seed for random users
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Display version and build info
    Version,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let telemetry_config =
        roster_telemetry::TelemetryConfig::new("roster").with_log_level(&cli.log_level);

    let telemetry_config = if cli.json_logs {
        telemetry_config.with_json_logs()
    } else {
        telemetry_config
    };

    roster_telemetry::init_logging(&telemetry_config);

    let cfg = config::Config::load();

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_cors,
        } => {
            let host = host.unwrap_or(cfg.host);
            let port = port.unwrap_or(cfg.port);
            commands::serve(host, port, cfg.cors && !no_cors).await?;
        }

        Commands::Filter { file, threshold } => {
            commands::filter(file.as_deref(), threshold.unwrap_or(cfg.threshold))?;
        }

        Commands::Demo { threshold, seed } => {
            commands::demo(threshold.unwrap_or(cfg.threshold), seed).await?;
        }

        Commands::Version => {
            commands::version();
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                config::show_config();
            }
            ConfigAction::Path => {
                println!("{}", config::Config::config_path().display());
            }
        },
    }

    Ok(())
}
