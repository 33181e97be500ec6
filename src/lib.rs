//! theme-builder - renders the Hate of Nature color theme
//!
//! Loads the theme definition from its source document and writes the
//! pretty-printed JSON file consumed by the editor's theming system.
//!
//! # Modules
//!
//! - [`theme`] - In-memory theme object and its JSON rendering
//! - [`source`] - Theme sources (JSON/TOML documents on disk)
//! - [`builder`] - Load, render and write a theme
//! - [`config`] - `theme-builder.toml` support and path resolution
//! - [`error`] - Build error taxonomy
//! - [`debug`] - Opt-in debug logging

pub mod builder;
pub mod config;
pub mod debug;
pub mod error;
pub mod source;
pub mod theme;

// Re-export commonly used types
pub use builder::{BuildReport, Freshness, ThemeBuilder};
pub use config::{BuildConfig, Config};
pub use error::BuildError;
pub use source::{FileSource, SourceFormat, ThemeSource};
pub use theme::Theme;
