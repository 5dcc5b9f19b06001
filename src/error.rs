//! Error handling types for the parser
//!
//! This module provides custom error types that give detailed information about
//! parsing failures, including line and column information where available.

use std::{error::Error, fmt};

/// Main error type for parsing operations
#[derive(Debug)]
pub struct ParseError {
    /// The specific kind of error
    kind: ParseErrorKind,
    /// Location where the error occurred
    location: Option<Location>,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Represents a location in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

/// Top-level error categories
#[derive(Debug, Clone)]
pub enum ParseErrorKind {
    Io(IoError),
    Structural(StructuralError),
    Dialect(DialectError),
    Value(ValueError),
}

/// Grammar-level failures: the input shape itself is broken
#[derive(Debug, Clone)]
pub enum StructuralError {
    /// Found one character while a specific other one was required
    UnexpectedCharacter { expected: char, found: char },
    /// Reached end of input inside a value, container, or comment
    UnexpectedEof,
    /// A string literal was never closed
    UnterminatedString,
    /// A block comment was never closed
    UnterminatedComment,
    /// A solidus was followed by neither another solidus nor an asterisk
    InvalidCommentStart(char),
    /// Non-whitespace content after a complete top-level value
    ExtraneousContent(char),
    /// Malformed INI section header
    InvalidSection(String),
    /// Malformed INI assignment line
    InvalidAssignment(String),
}

/// Feature-gated failures: valid in a relaxed dialect, not in this one
#[derive(Debug, Clone)]
pub enum DialectError {
    /// Comment found without the comments feature enabled
    CommentsNotAllowed,
    /// Trailing comma found without the trailing-comma feature enabled
    TrailingCommaNotAllowed,
    /// Bare top-level scalar without the any-type feature enabled
    ScalarNotAllowed,
}

/// Failures converting a raw lexeme into a concrete value
#[derive(Debug, Clone)]
pub enum ValueError {
    /// A bare lexeme that is neither a literal nor a number
    UnrecognizedLiteral(String),
    /// A numeric lexeme that fails classification
    InvalidNumber(String),
    /// A numeric lexeme whose conversion overflows its type
    NumberOutOfRange(String),
    /// Invalid escape sequence in a string
    InvalidEscape(char),
    /// Invalid unicode escape sequence
    InvalidUnicode(String),
    /// Raw control character inside a string literal
    ControlCharacter(char),
    /// A value tree that the target format cannot represent
    NotRepresentable(String),
}

/// IO operation errors
#[derive(Debug, Clone)]
pub enum IoError {
    /// Error reading from a file
    Read(String),
    /// Error writing to a file
    Write(String),
    /// File extension does not name a supported format
    UnknownFormat(String),
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: None,
            source: None,
            context: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_error = match &self.kind {
            ParseErrorKind::Io(err) => err.to_string(),
            ParseErrorKind::Structural(err) => err.to_string(),
            ParseErrorKind::Dialect(err) => err.to_string(),
            ParseErrorKind::Value(err) => err.to_string(),
        };

        if let Some(loc) = &self.location {
            write!(
                f,
                "at line {}, column {}: {}",
                loc.line, loc.column, base_error
            )?;
        } else {
            write!(f, "Error: {}", base_error)?;
        }

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter { expected, found } => {
                write!(
                    f,
                    "Unexpected character '{}', was expecting '{}'",
                    found, expected
                )
            }
            Self::UnexpectedEof => write!(f, "Unexpected end of input"),
            Self::UnterminatedString => write!(f, "Unterminated string literal"),
            Self::UnterminatedComment => write!(f, "Unterminated block comment"),
            Self::InvalidCommentStart(c) => {
                write!(f, "Invalid start sequence for comments: '/{}'", c)
            }
            Self::ExtraneousContent(c) => {
                write!(f, "Extraneous symbol '{}' found after complete value", c)
            }
            Self::InvalidSection(line) => write!(f, "Malformed section header: '{}'", line),
            Self::InvalidAssignment(line) => write!(f, "Malformed assignment: '{}'", line),
        }
    }
}

impl fmt::Display for DialectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommentsNotAllowed => {
                write!(f, "Found comment, but the comments feature is not enabled")
            }
            Self::TrailingCommaNotAllowed => write!(
                f,
                "Found trailing comma, but the trailing-comma feature is not enabled"
            ),
            Self::ScalarNotAllowed => write!(
                f,
                "Parsed non-object/non-array value, but the any-type feature is not enabled"
            ),
        }
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedLiteral(v) => {
                write!(f, "Could not convert '{}' to a JSON value", v)
            }
            Self::InvalidNumber(n) => write!(f, "Invalid number format: '{}'", n),
            Self::NumberOutOfRange(n) => write!(f, "Number out of range: '{}'", n),
            Self::InvalidEscape(c) => write!(f, "Invalid escape sequence '\\{}'", c),
            Self::InvalidUnicode(s) => write!(f, "Invalid unicode escape sequence: '{}'", s),
            Self::ControlCharacter(c) => {
                write!(
                    f,
                    "Unescaped control character {:#04x} in string",
                    u32::from(*c)
                )
            }
            Self::NotRepresentable(msg) => write!(f, "Value not representable: {}", msg),
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(msg) => write!(f, "Read error: {}", msg),
            Self::Write(msg) => write!(f, "Write error: {}", msg),
            Self::UnknownFormat(path) => write!(f, "Unknown file format: '{}'", path),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn Error + 'static))
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
