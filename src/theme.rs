//! Theme object
//!
//! A theme is a nested mapping of semantic keys (editor surfaces, token
//! scopes, UI elements) to color codes, style names or further mappings.
//! Key order is the order of the source document and is kept when rendering.

use crate::error::BuildError;
use serde_json::{Map, Value};

/// In-memory theme definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme(Map<String, Value>);

impl Theme {
    /// Create an empty theme
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a parsed document; `None` unless the root is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Append an entry, keeping insertion order
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Top-level keys in source order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as the editor-facing JSON document
    ///
    /// Two-space indentation, keys in source order, one trailing newline.
    /// Numbers keep the text they had in a JSON source.
    pub fn render(&self) -> Result<String, BuildError> {
        let mut out = serde_json::to_string_pretty(&self.0)?;
        out.push('\n');
        Ok(out)
    }
}
