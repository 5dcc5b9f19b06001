//! Parsers and the contract they share.
//!
//! Each grammar implements [`Parser::parse_internal`] against the raw
//! [`Reader`] primitives; the trait's provided methods handle opening the
//! source, the "missing file or empty input is not an error" policy, and the
//! diagnostic logging performed at the `parse` boundary.

pub mod features;
pub mod ini;
pub mod json;
pub mod value;

use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::reader::Reader;

pub use features::Features;
pub use ini::IniParser;
pub use json::JsonParser;
pub use value::{values_equal, Value};

/// A grammar driven by the shared reader primitives.
pub trait Parser {
    /// Parses one document from the reader.
    ///
    /// Returns `Ok(None)` when the input holds no document at all (empty or
    /// whitespace-only content), `Ok(Some(_))` for a complete document, and
    /// `Err` for any grammar violation. No partial trees are ever returned.
    fn parse_internal(&mut self, reader: &mut Reader) -> Result<Option<Value>>;

    /// Parses a string, exposing failures to the caller.
    fn try_parse(&mut self, input: &str) -> Result<Option<Value>> {
        let mut reader = Reader::new(input);
        self.parse_internal(&mut reader)
    }

    /// Parses the contents of a file, exposing failures to the caller.
    ///
    /// A file that is missing or cannot be read parses as an empty document
    /// rather than an error, so optional files can be consumed without an
    /// existence check.
    fn try_parse_file(&mut self, path: impl AsRef<Path>) -> Result<Option<Value>> {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(contents) => self.try_parse(&contents),
            Err(error) => {
                debug!("Could not read {}: {}", path.display(), error);
                Ok(None)
            }
        }
    }

    /// Parses a string, reporting failures only through the diagnostic log.
    ///
    /// Returns `None` for empty content and for any failure; callers needing
    /// to distinguish the two use [`Parser::try_parse`].
    fn parse(&mut self, input: &str) -> Option<Value> {
        match self.try_parse(input) {
            Ok(value) => value,
            Err(error) => {
                warn!("{}", error);
                None
            }
        }
    }

    /// Parses the contents of a file, reporting failures only through the
    /// diagnostic log.
    fn parse_file(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        match self.try_parse_file(path) {
            Ok(value) => value,
            Err(error) => {
                warn!("{}", error);
                None
            }
        }
    }
}
