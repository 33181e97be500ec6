//! Theme builder
//!
//! Loads the theme from its source, renders it and writes the editor-facing
//! JSON file. The write is a plain whole-file overwrite.

use crate::config::BuildConfig;
use crate::debug;
use crate::error::BuildError;
use crate::source::{FileSource, ThemeSource};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// File that was written
    pub path: PathBuf,
    /// Bytes written, trailing newline included
    pub bytes: usize,
    /// Number of top-level keys in the theme
    pub top_level_keys: usize,
}

/// State of the output file relative to the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
}

/// Serializes a theme source into its output file
pub struct ThemeBuilder<S: ThemeSource> {
    source: S,
    output_path: PathBuf,
}

impl ThemeBuilder<FileSource> {
    /// Builder reading the source file named in `config`
    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(FileSource::new(&config.source), config.output_path())
    }
}

impl<S: ThemeSource> ThemeBuilder<S> {
    pub fn new(source: S, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Load, render and write the theme
    ///
    /// The source is fully loaded and rendered before the output file is
    /// opened, so a failing source never touches an existing output.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let theme = self.source.load()?;
        debug::log_category(
            "SOURCE",
            &format!(
                "loaded {} top-level keys from {}",
                theme.len(),
                self.source.describe()
            ),
        );

        let rendered = theme.render()?;

        fs::write(&self.output_path, &rendered).map_err(|source| BuildError::WriteOutput {
            path: self.output_path.clone(),
            source,
        })?;
        debug::log_category(
            "OUTPUT",
            &format!(
                "wrote {} bytes to {}",
                rendered.len(),
                self.output_path.display()
            ),
        );

        Ok(BuildReport {
            path: self.output_path.clone(),
            bytes: rendered.len(),
            top_level_keys: theme.len(),
        })
    }

    /// Compare the existing output with what `build` would write
    pub fn check(&self) -> Result<Freshness, BuildError> {
        let rendered = self.source.load()?.render()?;

        let existing = match fs::read(&self.output_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Freshness::Missing),
            Err(source) => {
                return Err(BuildError::ReadOutput {
                    path: self.output_path.clone(),
                    source,
                });
            }
        };

        let freshness = if existing == rendered.as_bytes() {
            Freshness::UpToDate
        } else {
            Freshness::Stale
        };
        crate::debug_log!("{} is {:?}", self.output_path.display(), freshness);
        Ok(freshness)
    }
}
