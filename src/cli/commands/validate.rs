//! Validate command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("validate")
        .about("Validate configuration, registries and definitions")
        .arg(utils::config_arg())
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Validating configuration");

    let config = utils::load_config(matches)?;
    let app = utils::create_app(config)?;

    let v2 = app.v2_config();
    let v3 = app.v3_config()?;
    let missing = app.definitions().missing_dependencies();

    println!("Configuration is valid!");
    println!("Version: {}", app.config().version);
    println!("Registered types: {}", app.namer().len());
    println!("Definitions: {}", app.definitions().len());
    println!("OpenAPI v2 definitions: {}", v2.resolve_definitions().len());
    println!("OpenAPI v3 definitions: {}", v3.definitions().len());

    if !missing.is_empty() {
        println!("Missing dependencies:");
        for dependency in &missing {
            println!("  - {}", dependency);
        }
    }

    Ok(())
}
