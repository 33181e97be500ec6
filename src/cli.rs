//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "theme-builder")]
#[command(author, version, about = "Render the color theme source to editor theme JSON")]
pub struct Cli {
    /// Path to theme-builder.toml (default: ./theme-builder.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the theme JSON (default when no command is given)
    Build,
    /// Fail if the theme JSON on disk does not match the source
    Check,
    /// Write a default theme-builder.toml
    Init {
        /// Force overwrite existing file
        #[arg(short, long)]
        force: bool,
    },
}
