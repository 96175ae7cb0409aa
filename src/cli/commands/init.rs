//! Init command implementation

use crate::Config;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_OUTPUT: &str = ".oauth-openapi.yaml";

pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new configuration file")
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file path")
                .value_name("FILE")
                .default_value(DEFAULT_OUTPUT),
        )
        .arg(
            clap::Arg::new("definitions")
                .short('d')
                .long("definitions")
                .help("Generated definitions file to reference")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite an existing file")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    if output_path.exists() && !matches.get_flag("force") {
        return Err(anyhow!(
            "{:?} already exists, use --force to overwrite it",
            output_path
        ));
    }

    info!("Initializing configuration file: {:?}", output_path);

    let config = Config {
        definitions: matches.get_one::<String>("definitions").map(PathBuf::from),
        ..Config::default()
    };
    config.validate()?;

    let content = serde_yaml::to_string(&config)?;
    crate::utils::write_output(Some(&output_path), &content).await?;

    info!("Configuration file created: {:?}", output_path);
    println!("Configuration file created at {}", output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("oauth-openapi.yaml");
        let target_str = target.to_string_lossy().to_string();

        let matches = command()
            .try_get_matches_from(["init", "--output", target_str.as_str(), "--definitions", "defs.json"])
            .unwrap();
        run(&matches).await.unwrap();

        let config = Config::from_file(&target).unwrap();
        assert_eq!(config.definitions, Some(PathBuf::from("defs.json")));

        let matches = command()
            .try_get_matches_from(["init", "--output", target_str.as_str()])
            .unwrap();
        assert!(run(&matches).await.is_err());

        let matches = command()
            .try_get_matches_from(["init", "--output", target_str.as_str(), "--force"])
            .unwrap();
        run(&matches).await.unwrap();
        assert!(Config::from_file(&target).unwrap().definitions.is_none());
    }
}
