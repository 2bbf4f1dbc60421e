//! transcript-tagger - Tag a text transcript with an LLM
//!
//! Entry point for the transcript-tagger CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use transcript_tagger::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match transcript_tagger::cli::commands::run(cli).await {
        Ok(()) => Ok(()),
        Err(e) if e.is_handled() => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
