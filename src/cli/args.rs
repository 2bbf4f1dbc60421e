//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Tag a transcript using OpenAI.
#[derive(Parser, Debug)]
#[command(name = crate::APP_NAME)]
#[command(author, version = crate::VERSION, about, long_about = None)]
pub struct Cli {
    /// Input transcript file
    #[arg(long)]
    pub input: PathBuf,

    /// Output tagged transcript file
    #[arg(long)]
    pub output: PathBuf,
}
