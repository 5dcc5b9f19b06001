//! Line-oriented INI parser.
//!
//! A much simpler grammar than JSON, built on the same reader primitives and
//! parser contract: `[section]` headers followed by `key=value` pairs.
//! The document shape is an object of sections, each an object of string
//! values.

use std::collections::HashMap;

use crate::error::{ParseError, ParseErrorKind, Result, StructuralError};
use crate::parser::{value::Value, Parser};
use crate::reader::Reader;

/// Parser for INI documents.
#[derive(Debug, Default, Clone)]
pub struct IniParser;

impl IniParser {
    pub fn new() -> Self {
        Self
    }

    fn error(line_number: usize, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind).with_location(line_number, 1)
    }

    /// Consumes one line, without its terminator. `None` at end of input.
    fn read_line(reader: &mut Reader) -> Option<String> {
        if reader.eof() {
            return None;
        }

        let mut line = String::new();

        while let Some(symbol) = reader.get() {
            if symbol == '\n' {
                break;
            }

            line.push(symbol);
        }

        Some(line)
    }

    /// Parses a `[section]` header, returning the trimmed section name.
    fn parse_section(line: &str, line_number: usize) -> Result<String> {
        let malformed =
            || Self::error(line_number, section_error(line));

        let name = line
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(malformed)?
            .trim();

        if name.is_empty() || is_quoted(name) {
            return Err(malformed());
        }

        Ok(name.to_string())
    }

    /// Parses a `key=value` line, splitting on the first `=` only.
    ///
    /// Both sides must be non-empty. Values may be single- or double-quoted
    /// to preserve surrounding whitespace; keys may not be quoted at all.
    fn parse_assignment(line: &str, line_number: usize) -> Result<(String, String)> {
        let malformed = || Self::error(line_number, assignment_error(line));

        let (key, value) = line.split_once('=').ok_or_else(malformed)?;
        let key = key.trim();
        let value = value.trim();

        if key.is_empty() || is_quoted(key) || value.is_empty() {
            return Err(malformed());
        }

        let value = unquote(value).ok_or_else(malformed)?;

        Ok((key.to_string(), value.to_string()))
    }
}

/// True when the text begins or ends with a quote character.
fn is_quoted(text: &str) -> bool {
    text.starts_with(['"', '\'']) || text.ends_with(['"', '\''])
}

/// Strips one pair of matching surrounding quotes, if present.
///
/// `None` for imbalanced or mismatched quotes.
fn unquote(value: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if value.starts_with(quote) || value.ends_with(quote) {
            return value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote));
        }
    }

    Some(value)
}

fn section_error(line: &str) -> ParseErrorKind {
    ParseErrorKind::Structural(StructuralError::InvalidSection(line.to_string()))
}

fn assignment_error(line: &str) -> ParseErrorKind {
    ParseErrorKind::Structural(StructuralError::InvalidAssignment(line.to_string()))
}

impl Parser for IniParser {
    fn parse_internal(&mut self, reader: &mut Reader) -> Result<Option<Value>> {
        let mut sections: HashMap<String, Value> = HashMap::new();
        let mut current_section: Option<String> = None;
        let mut saw_content = false;

        loop {
            let (line_number, _) = reader.location();

            let Some(raw_line) = Self::read_line(reader) else {
                break;
            };

            let line = raw_line.trim();

            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            saw_content = true;

            if line.starts_with('[') || line.ends_with(']') {
                let name = Self::parse_section(line, line_number)?;
                current_section = Some(name);
            } else {
                let (key, value) = Self::parse_assignment(line, line_number)?;

                let section = current_section
                    .as_ref()
                    .ok_or_else(|| Self::error(line_number, assignment_error(line)))?;

                // Sections materialize on their first value; duplicate keys
                // and duplicate sections resolve to last write wins.
                let members = sections
                    .entry(section.clone())
                    .or_insert_with(|| Value::Object(HashMap::new()));

                if let Value::Object(members) = members {
                    members.insert(key, Value::String(value));
                }
            }
        }

        if saw_content {
            Ok(Some(Value::Object(sections)))
        } else {
            Ok(None)
        }
    }
}
