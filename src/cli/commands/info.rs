//! Info command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};
use oauth_openapi_config::{info, version};

pub fn command() -> Command {
    Command::new("info").about("Show documentation metadata").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show detailed information")
            .action(clap::ArgAction::SetTrue),
    )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let detailed = matches.get_flag("detailed");
    let spec_info = info::spec_info();
    let build = version::get();

    println!("{}", spec_info.title);
    println!("Version: {}", build);
    if let Some(license) = &spec_info.license {
        println!(
            "License: {} ({})",
            license.name,
            license.url.as_deref().unwrap_or("-")
        );
    }
    println!(
        "Security: {} ({} header)",
        info::BEARER_TOKEN,
        info::BEARER_TOKEN_HEADER
    );

    if detailed {
        println!("\nBuild:");
        println!("  - Git commit: {}", build.git_commit);
        println!("  - Build date: {}", build.build_date);
        println!("\nIgnored path prefixes:");
        for prefix in info::IGNORE_PREFIXES {
            println!("  - {}", prefix);
        }
        if let Some(description) = &spec_info.description {
            println!("\n{}", description);
        }
    }

    Ok(())
}
