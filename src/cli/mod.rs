//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("oauth-openapi")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Render and validate OpenAPI documentation for the OAuth API server")
            .subcommand(commands::init::command())
            .subcommand(commands::validate::command())
            .subcommand(commands::render::command())
            .subcommand(commands::info::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("init", sub_matches)) => commands::init::run(sub_matches).await,
            Some(("validate", sub_matches)) => commands::validate::run(sub_matches).await,
            Some(("render", sub_matches)) => commands::render::run(sub_matches).await,
            Some(("info", sub_matches)) => commands::info::run(sub_matches).await,
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use crate::config::CONFIG_FILE_NAMES;
    use anyhow::{anyhow, Result};
    use std::path::PathBuf;
    use tracing::{debug, info};

    /// `--config` argument shared by commands that load configuration
    pub fn config_arg() -> clap::Arg {
        clap::Arg::new("config")
            .short('c')
            .long("config")
            .help("Configuration file path")
            .value_name("FILE")
    }

    /// Get configuration file path from arguments or the default locations
    pub fn get_config_path(matches: &clap::ArgMatches) -> Option<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Some(PathBuf::from(config_path));
        }

        let mut default_paths: Vec<PathBuf> =
            CONFIG_FILE_NAMES.iter().map(PathBuf::from).collect();
        if let Some(config_dir) = dirs::config_dir() {
            default_paths.push(config_dir.join("oauth-openapi").join("config.yaml"));
        }

        default_paths.into_iter().find(|path| {
            debug!("Looking for configuration at {:?}", path);
            path.exists()
        })
    }

    /// Load configuration from file, falling back to the defaults when no
    /// file exists
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::Config> {
        match get_config_path(matches) {
            Some(path) => {
                info!("Loading configuration from {:?}", path);
                crate::Config::from_file(&path)
                    .map_err(|e| anyhow!("Invalid configuration {:?}: {}", path, e))
            }
            None => {
                info!("No configuration file found, using defaults");
                Ok(crate::Config::default())
            }
        }
    }

    /// Create the application context
    pub fn create_app(config: crate::Config) -> Result<crate::OAuthOpenApi> {
        Ok(crate::OAuthOpenApi::new(config)?)
    }
}
