//! Shared helpers and re-exports for the integration test suites.

use std::{env, fs, path::PathBuf};

pub use crate::error::{
    DialectError, IoError, ParseErrorKind, Result, StructuralError, ValueError,
};
pub use crate::formatter::{FormatConfig, Formatter, IniFormatter, JsonFormatter};
pub use crate::parser::{values_equal, Features, IniParser, JsonParser, Parser, Value};
pub use crate::parse_file;
pub use crate::utils::{
    format_ini, format_json, parse_ini, parse_json, parse_json_with, read_file, write_file,
};

/// Path for a scratch file under the system temp directory.
pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("jini_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// Asserts structural equality with a readable failure message.
#[allow(clippy::panic)]
pub fn assert_values_equal(actual: &Value, expected: &Value, message: &str) {
    if !values_equal(actual, expected) {
        panic!("{}: got {}, expected {}", message, actual, expected);
    }
}
