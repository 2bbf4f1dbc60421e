//! CLI module for transcript-tagger
//!
//! Contains argument parsing and the tagging command.

pub mod args;
pub mod commands;

pub use args::Cli;
