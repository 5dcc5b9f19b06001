//! Convenience functions over the parsers and formatters.

use std::fs;

use crate::{
    error::{IoError, ParseError, ParseErrorKind, Result},
    formatter::{FormatConfig, Formatter, IniFormatter, JsonFormatter},
    parser::{Features, IniParser, JsonParser, Parser, Value},
};

pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        ParseError::new(ParseErrorKind::Io(IoError::Read(path.to_string()))).with_source(e)
    })
}

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        ParseError::new(ParseErrorKind::Io(IoError::Write(path.to_string()))).with_source(e)
    })
}

/// Parses strict JSON.
pub fn parse_json(content: &str) -> Result<Option<Value>> {
    JsonParser::default().try_parse(content)
}

/// Parses JSON with the given dialect relaxations.
pub fn parse_json_with(content: &str, features: Features) -> Result<Option<Value>> {
    JsonParser::new(features).try_parse(content)
}

pub fn parse_ini(content: &str) -> Result<Option<Value>> {
    IniParser::new().try_parse(content)
}

pub fn format_json(value: &Value) -> Result<String> {
    JsonFormatter.format(value, &FormatConfig::default())
}

pub fn format_ini(value: &Value) -> Result<String> {
    IniFormatter.format(value, &FormatConfig::default())
}
