//! Serialization of parsed values back into text.

pub mod ini;
pub mod json;

pub use self::{ini::IniFormatter, json::JsonFormatter};

use crate::error::Result;
use crate::parser::Value;

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces for indentation
    pub indent_spaces: usize,
    /// Whether to sort object keys
    pub sort_keys: bool,
    /// Single-line output with no indentation
    pub compact: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_spaces: 2,
            sort_keys: true,
            compact: false,
        }
    }
}

impl FormatConfig {
    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }
}

/// Renders a value tree as text in one concrete format.
pub trait Formatter {
    fn format(&self, value: &Value, config: &FormatConfig) -> Result<String>;
}

/// Sorts object entries when the configuration asks for it.
fn sorted_entries<'a>(
    members: &'a std::collections::HashMap<String, Value>,
    config: &FormatConfig,
) -> Vec<(&'a String, &'a Value)> {
    let mut entries: Vec<_> = members.iter().collect();

    if config.sort_keys {
        entries.sort_by_key(|(key, _)| *key);
    }

    entries
}
