//! Check command implementation

use anyhow::{Context, Result, bail};
use std::path::Path;
use theme_builder::{Config, Freshness, ThemeBuilder};

/// Verify the theme JSON on disk matches a fresh render
pub fn run_check(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_build_config(config_path)?;
    let builder = ThemeBuilder::from_config(&config);

    let freshness = builder.check().context("Theme check failed")?;
    let path = builder.output_path().display();

    match freshness {
        Freshness::UpToDate => {
            println!("Theme up to date: {path}");
            Ok(())
        }
        Freshness::Stale => bail!("{path} is out of date; run 'theme-builder build'"),
        Freshness::Missing => bail!("{path} does not exist; run 'theme-builder build'"),
    }
}
