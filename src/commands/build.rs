//! Build command implementation

use anyhow::{Context, Result};
use std::path::Path;
use theme_builder::{Config, ThemeBuilder};

/// Run the build and print the confirmation line
pub fn run_build(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_build_config(config_path)?;

    let report = ThemeBuilder::from_config(&config)
        .build()
        .context("Theme build failed")?;

    println!("Built theme: {}", report.path.display());
    Ok(())
}
