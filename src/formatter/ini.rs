//! INI output.

use std::fmt::Write;

use crate::error::{ParseError, ParseErrorKind, Result, ValueError};
use crate::formatter::{sorted_entries, FormatConfig, Formatter};
use crate::parser::Value;

/// Serializes a two-level section/key tree as INI text.
///
/// Fails for any tree that is not an object of section objects, or when a
/// section member is itself a container.
#[derive(Debug, Default, Clone, Copy)]
pub struct IniFormatter;

impl Formatter for IniFormatter {
    fn format(&self, value: &Value, config: &FormatConfig) -> Result<String> {
        let sections = value
            .as_object()
            .ok_or_else(|| not_representable("document root must be an object of sections"))?;

        let mut output = String::new();

        for (i, (name, section)) in sorted_entries(sections, config).into_iter().enumerate() {
            let members = section
                .as_object()
                .ok_or_else(|| not_representable("section must be an object"))?;

            if i > 0 {
                output.push('\n');
            }

            let _ = writeln!(output, "[{}]", name);

            for (key, member) in sorted_entries(members, config) {
                let _ = writeln!(output, "{}={}", key, scalar_text(member)?);
            }
        }

        Ok(output)
    }
}

/// Renders one section member; values that would be ambiguous without
/// delimiters (empty or carrying surrounding whitespace) are quoted.
fn scalar_text(value: &Value) -> Result<String> {
    match value {
        Value::String(text) => {
            if text.is_empty() || text.trim().len() != text.len() {
                Ok(format!("\"{}\"", text))
            } else {
                Ok(text.clone())
            }
        }
        Value::Null
        | Value::Boolean(_)
        | Value::SignedInteger(_)
        | Value::UnsignedInteger(_)
        | Value::FloatingPoint(_) => Ok(value.to_string()),
        Value::Array(_) | Value::Object(_) => {
            Err(not_representable("section values must be scalars"))
        }
    }
}

fn not_representable(reason: &str) -> ParseError {
    ParseError::new(ParseErrorKind::Value(ValueError::NotRepresentable(
        reason.to_string(),
    )))
}
