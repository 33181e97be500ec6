//! Init command implementation

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use theme_builder::Config;
use theme_builder::config::CONFIG_FILE_NAME;

/// Write a default configuration file
pub fn run_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::generate_default(&path)?;
    println!("Created configuration: {}", path.display());
    Ok(())
}
