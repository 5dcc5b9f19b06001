//! jini: A parser for JSON and INI configuration files
//!
//! This crate provides functionality to:
//! - Parse JSON documents, with optional relaxations for comments, trailing
//!   commas, and bare top-level scalars
//! - Parse INI files into a section/key tree
//! - Pretty print parsed documents
//! - Handle errors with detailed line and column context
//!
//! # Examples
//! ```
//! use jini::{JsonParser, Parser};
//!
//! let mut parser = JsonParser::default();
//! let value = parser.parse(r#"{"name": "example"}"#);
//! assert!(value.is_some());
//! ```

use std::path::Path;

use tracing::{debug, info, instrument, warn};

pub mod error;
pub mod formatter;
pub mod parser;
pub mod reader;
pub mod test_utils;
pub mod token;
pub mod utils;

// Re-exports
pub use error::{IoError, ParseError, ParseErrorKind, Result};
pub use parser::{values_equal, Features, IniParser, JsonParser, Parser, Value};
use utils::{parse_ini, parse_json};

/// Parses a file, choosing the grammar from its extension.
#[instrument]
pub fn parse_file(path: &str) -> Result<Option<Value>> {
    debug!("Starting to parse file: {}", path);

    let content = utils::read_file(path)?;

    info!("File read successfully, determining format");

    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    let result = match extension.as_deref() {
        Some("json") => parse_json(&content),
        Some("ini") => parse_ini(&content),
        _ => {
            warn!("Unknown file extension");
            Err(ParseError::new(ParseErrorKind::Io(IoError::UnknownFormat(
                path.to_string(),
            ))))
        }
    };

    debug!("Parsing completed");
    result
}
