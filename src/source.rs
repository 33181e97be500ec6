//! Theme sources
//!
//! The theme content lives in a data file next to the package. `.json` and
//! `.toml` documents are accepted; both keep their key order.

use crate::error::BuildError;
use crate::theme::Theme;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// Something that can produce a fully materialized theme
#[cfg_attr(test, automock)]
pub trait ThemeSource {
    /// Load the theme eagerly
    fn load(&self) -> Result<Theme, BuildError>;

    /// Human-readable reference used in log lines
    fn describe(&self) -> String;
}

/// Document format of a theme source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
}

impl SourceFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(SourceFormat::Json),
            "toml" => Some(SourceFormat::Toml),
            _ => None,
        }
    }

    fn parse(self, content: &str) -> Result<Value, String> {
        match self {
            SourceFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            SourceFormat::Toml => {
                let table: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;
                toml_to_json(toml::Value::Table(table), "")
            }
        }
    }
}

/// Convert a TOML value to JSON; datetimes become their TOML text
///
/// `key` is the dotted path of `value`, used to name non-finite floats.
fn toml_to_json(value: toml::Value, key: &str) -> Result<Value, String> {
    let json = match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| format!("`{key}` is {f}, which has no JSON representation"))?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| toml_to_json(item, &format!("{key}[{i}]")))
                .collect::<Result<_, _>>()?,
        ),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| {
                    let path = if key.is_empty() {
                        k.clone()
                    } else {
                        format!("{key}.{k}")
                    };
                    toml_to_json(v, &path).map(|v| (k, v))
                })
                .collect::<Result<_, _>>()?,
        ),
    };
    Ok(json)
}

/// Theme source backed by a file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemeSource for FileSource {
    fn load(&self) -> Result<Theme, BuildError> {
        let format =
            SourceFormat::from_path(&self.path).ok_or_else(|| BuildError::UnsupportedFormat {
                path: self.path.clone(),
            })?;

        let content = fs::read_to_string(&self.path).map_err(|source| BuildError::ReadSource {
            path: self.path.clone(),
            source,
        })?;

        let value = format
            .parse(&content)
            .map_err(|reason| BuildError::ParseSource {
                path: self.path.clone(),
                reason,
            })?;

        Theme::from_value(value).ok_or_else(|| BuildError::NotAnObject {
            path: self.path.clone(),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            SourceFormat::from_path(Path::new("src/theme.source.json")),
            Some(SourceFormat::Json)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("theme.TOML")),
            Some(SourceFormat::Toml)
        );
        assert_eq!(SourceFormat::from_path(Path::new("theme.source.cjs")), None);
        assert_eq!(SourceFormat::from_path(Path::new("theme")), None);
    }

    #[test]
    fn test_load_json_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "theme.source.json",
            r##"{"type": "dark", "colors": {"editor.background": "#0b0d0a"}}"##,
        );

        let theme = FileSource::new(&path).load().unwrap();

        assert_eq!(theme.keys().collect::<Vec<_>>(), ["type", "colors"]);
        assert_eq!(theme.get("type"), Some(&json!("dark")));
    }

    #[test]
    fn test_load_toml_source_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "theme.source.toml",
            r##"
name = "Hate of Nature"
type = "dark"

[colors]
"editor.foreground" = "#c9d1c3"
"editor.background" = "#0b0d0a"
"##,
        );

        let theme = FileSource::new(&path).load().unwrap();

        assert_eq!(theme.keys().collect::<Vec<_>>(), ["name", "type", "colors"]);
        let colors = theme.get("colors").unwrap().as_object().unwrap();
        assert_eq!(
            colors.keys().collect::<Vec<_>>(),
            ["editor.foreground", "editor.background"]
        );
    }

    #[test]
    fn test_toml_datetimes_become_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "theme.source.toml",
            r##"
released = 2024-01-02
updated = 1979-05-27T07:32:00Z
ratio = 1.0
"##,
        );

        let theme = FileSource::new(&path).load().unwrap();

        assert_eq!(theme.get("released"), Some(&json!("2024-01-02")));
        assert_eq!(theme.get("updated"), Some(&json!("1979-05-27T07:32:00Z")));
        let rendered = theme.render().unwrap();
        assert!(rendered.contains("\"released\": \"2024-01-02\""));
        assert!(rendered.contains("\"ratio\": 1.0"));
        assert!(!rendered.contains("$__toml_private_datetime"));
    }

    #[test]
    fn test_toml_infinite_float_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(&dir, "theme.source.toml", "big = inf\n");

        let err = FileSource::new(&path).load().unwrap_err();

        assert!(matches!(err, BuildError::ParseSource { .. }));
        let message = err.to_string();
        assert!(message.contains("theme.source.toml"));
        assert!(message.contains("`big`"));
    }

    #[test]
    fn test_toml_nested_nan_names_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "theme.source.toml",
            "[colors]\n\"editor.background\" = \"#0b0d0a\"\nalpha = [0.5, nan]\n",
        );

        let err = FileSource::new(&path).load().unwrap_err();

        assert!(err.is_load_error());
        assert!(err.to_string().contains("`colors.alpha[1]`"));
    }

    #[test]
    fn test_missing_source_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = FileSource::new(&path).load().unwrap_err();

        assert!(matches!(err, BuildError::ReadSource { .. }));
        assert!(err.is_load_error());
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_malformed_source_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(&dir, "broken.json", r##"{"colors": {"#fff""##);

        let err = FileSource::new(&path).load().unwrap_err();

        assert!(matches!(err, BuildError::ParseSource { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_array_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(&dir, "list.json", r##"["#fff", "#000"]"##);

        let err = FileSource::new(&path).load().unwrap_err();

        assert!(matches!(err, BuildError::NotAnObject { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = FileSource::new("src/theme.source.cjs").load().unwrap_err();

        assert!(matches!(err, BuildError::UnsupportedFormat { .. }));
        assert!(err.is_load_error());
    }
}
