//! Render command implementation

use crate::cli::utils;
use crate::{OpenApiVersion, OutputFormat};
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("render")
        .about("Render an OpenAPI documentation skeleton")
        .arg(
            clap::Arg::new("openapi")
                .long("openapi")
                .help("OpenAPI version to render")
                .value_parser(["v2", "v3"])
                .default_value("v3"),
        )
        .arg(utils::config_arg())
        .arg(
            clap::Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format, overrides the configuration")
                .value_parser(["json", "yaml"]),
        )
        .arg(
            clap::Arg::new("out")
                .short('o')
                .long("out")
                .help("Write to a file instead of stdout")
                .value_name("FILE"),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let version: OpenApiVersion = matches
        .get_one::<String>("openapi")
        .map(String::as_str)
        .unwrap_or("v3")
        .parse()?;

    let config = utils::load_config(matches)?;
    let mut output = config.output.clone();
    if let Some(format) = matches.get_one::<String>("format") {
        output.format = format.parse::<OutputFormat>()?;
    }

    let app = utils::create_app(config)?;
    let rendered = app
        .render_with(version, &output)
        .map_err(|e| anyhow!("Failed to render OpenAPI {} document: {}", version, e))?;

    let out = matches.get_one::<String>("out").map(PathBuf::from);
    crate::utils::write_output(out.as_deref(), &rendered).await?;

    if let Some(path) = out {
        info!("Wrote OpenAPI {} document to {:?}", version, path);
    }

    Ok(())
}
