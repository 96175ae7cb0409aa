//! oauth-openapi CLI binary

use anyhow::Result;

use oauth_openapi::cli::CliApp;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so rendered documents on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oauth_openapi=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let matches = CliApp::app().get_matches();

    // Run the CLI application
    CliApp::run(&matches).await
}
