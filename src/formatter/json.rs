//! JSON output.

use std::fmt::Write;

use crate::error::Result;
use crate::formatter::{sorted_entries, FormatConfig, Formatter};
use crate::parser::Value;

/// Serializes a value tree as JSON text.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, value: &Value, config: &FormatConfig) -> Result<String> {
        let mut output = String::new();
        write_value(&mut output, value, config, 0);
        Ok(output)
    }
}

/// Escapes a string for embedding in JSON output.
///
/// The reverse of parse-time decoding: quote, reverse solidus, the named
/// control escapes, and `\uXXXX` for any other control character.
pub(crate) fn escape_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for symbol in text.chars() {
        match symbol {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{8}' => escaped.push_str("\\b"),
            '\u{c}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if u32::from(c) < 0x20 => {
                let _ = write!(escaped, "\\u{:04x}", u32::from(c));
            }
            c => escaped.push(c),
        }
    }

    escaped
}

fn write_value(output: &mut String, value: &Value, config: &FormatConfig, depth: usize) {
    match value {
        Value::Array(values) => write_array(output, values, config, depth),
        Value::Object(_) => write_object(output, value, config, depth),
        Value::String(text) => {
            output.push('"');
            output.push_str(&escape_string(text));
            output.push('"');
        }
        scalar => {
            let _ = write!(output, "{}", scalar);
        }
    }
}

fn write_array(output: &mut String, values: &[Value], config: &FormatConfig, depth: usize) {
    if values.is_empty() {
        output.push_str("[]");
        return;
    }

    output.push('[');

    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }

        write_newline_and_indent(output, config, depth + 1);
        write_value(output, value, config, depth + 1);
    }

    write_newline_and_indent(output, config, depth);
    output.push(']');
}

fn write_object(output: &mut String, value: &Value, config: &FormatConfig, depth: usize) {
    let Some(members) = value.as_object() else {
        return;
    };

    if members.is_empty() {
        output.push_str("{}");
        return;
    }

    output.push('{');

    for (i, (key, member)) in sorted_entries(members, config).into_iter().enumerate() {
        if i > 0 {
            output.push(',');
        }

        write_newline_and_indent(output, config, depth + 1);

        output.push('"');
        output.push_str(&escape_string(key));
        output.push('"');
        output.push(':');

        if !config.compact {
            output.push(' ');
        }

        write_value(output, member, config, depth + 1);
    }

    write_newline_and_indent(output, config, depth);
    output.push('}');
}

fn write_newline_and_indent(output: &mut String, config: &FormatConfig, depth: usize) {
    if config.compact {
        return;
    }

    output.push('\n');

    for _ in 0..depth * config.indent_spaces {
        output.push(' ');
    }
}
