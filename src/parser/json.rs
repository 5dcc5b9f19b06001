//! Recursive-descent JSON parser.
//!
//! The engine consumes the reader character by character, dispatching on the
//! token classification of the character under the cursor. Strict RFC-8259
//! grammar by default; the [`Features`] set enables comments, trailing
//! commas, and bare top-level scalars.

pub mod number;
pub mod unicode;

use std::collections::HashMap;

use crate::error::{
    DialectError, ParseError, ParseErrorKind, Result, StructuralError, ValueError,
};
use crate::parser::{features::Features, value::Value, Parser};
use crate::reader::Reader;
use crate::token::Token;

use number::NumberType;

/// Parser for JSON documents.
///
/// The feature set is fixed at construction; one instance may be reused for
/// sequential parses but holds no state between them.
#[derive(Debug, Default, Clone)]
pub struct JsonParser {
    features: Features,
}

/// Outcome of inspecting the next significant token inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContainerState {
    /// Another element (or the first element) follows
    More,
    /// The closing token was consumed
    Done,
}

impl JsonParser {
    pub fn new(features: Features) -> Self {
        Self { features }
    }

    pub fn features(&self) -> Features {
        self.features
    }

    fn error(reader: &Reader, kind: ParseErrorKind) -> ParseError {
        let (line, column) = reader.location();
        ParseError::new(kind).with_location(line, column)
    }

    /// Parses one JSON value of any shape.
    fn parse_json(&self, reader: &mut Reader) -> Result<Value> {
        self.consume_whitespace_and_comments(reader)?;

        match reader.peek_token(0) {
            Token::StartBrace => self.parse_object(reader),
            Token::StartBracket => self.parse_array(reader),
            Token::Quote => Ok(Value::String(self.parse_quoted_string(reader)?)),
            _ => self.parse_value(reader),
        }
    }

    fn parse_object(&self, reader: &mut Reader) -> Result<Value> {
        let mut object = HashMap::new();

        // Discard the opening brace, which has already been peeked.
        reader.discard();

        loop {
            if self.container_state(reader, Token::CloseBrace)? == ContainerState::Done {
                break;
            }

            if !object.is_empty()
                && self.consume_comma(reader, Token::CloseBrace)? == ContainerState::Done
            {
                break;
            }

            let key = self.parse_quoted_string(reader)?;
            self.consume_token(reader, Token::Colon)?;

            let value = self.parse_json(reader)?;

            // Duplicate keys resolve to last write wins.
            object.insert(key, value);
        }

        Ok(Value::Object(object))
    }

    fn parse_array(&self, reader: &mut Reader) -> Result<Value> {
        let mut array = Vec::new();

        // Discard the opening bracket, which has already been peeked.
        reader.discard();

        loop {
            if self.container_state(reader, Token::CloseBracket)? == ContainerState::Done {
                break;
            }

            if !array.is_empty()
                && self.consume_comma(reader, Token::CloseBracket)? == ContainerState::Done
            {
                break;
            }

            array.push(self.parse_json(reader)?);
        }

        Ok(Value::Array(array))
    }

    /// Decides whether a container has more elements to parse.
    ///
    /// Consumes the closing token when it is next; an end of input here means
    /// the container was never terminated.
    fn container_state(&self, reader: &mut Reader, end_token: Token) -> Result<ContainerState> {
        self.consume_whitespace_and_comments(reader)?;

        let token = reader.peek_token(0);

        if token == end_token {
            reader.discard();
            Ok(ContainerState::Done)
        } else if token == Token::EndOfFile {
            Err(Self::error(
                reader,
                ParseErrorKind::Structural(StructuralError::UnexpectedEof),
            ))
        } else {
            Ok(ContainerState::More)
        }
    }

    /// Requires a comma between elements; a comma directly before the closing
    /// token is a trailing comma and is dialect-gated.
    fn consume_comma(&self, reader: &mut Reader, end_token: Token) -> Result<ContainerState> {
        self.consume_token(reader, Token::Comma)?;

        match self.container_state(reader, end_token)? {
            ContainerState::Done => {
                if self.features.allow_trailing_comma {
                    Ok(ContainerState::Done)
                } else {
                    Err(Self::error(
                        reader,
                        ParseErrorKind::Dialect(DialectError::TrailingCommaNotAllowed),
                    ))
                }
            }
            ContainerState::More => Ok(ContainerState::More),
        }
    }

    /// Consumes whitespace, then requires the next character to be `expected`.
    fn consume_token(&self, reader: &mut Reader, expected: Token) -> Result<()> {
        Self::consume_whitespace(reader);

        match reader.get_token() {
            token if token == expected => Ok(()),
            Token::EndOfFile => Err(Self::error(
                reader,
                ParseErrorKind::Structural(StructuralError::UnexpectedEof),
            )),
            token => Err(Self::error(
                reader,
                ParseErrorKind::Structural(StructuralError::UnexpectedCharacter {
                    expected: expected.symbol().unwrap_or('?'),
                    found: token.symbol().unwrap_or('?'),
                }),
            )),
        }
    }

    /// Parses a quoted string, returning its decoded contents.
    ///
    /// The scan accumulates raw characters; escape validity is deferred to
    /// the unicode decoder. A reverse solidus consumes the following
    /// character unconditionally so an escaped quote cannot terminate the
    /// string early.
    fn parse_quoted_string(&self, reader: &mut Reader) -> Result<String> {
        let mut raw = String::new();

        self.consume_token(reader, Token::Quote)?;

        loop {
            match reader.get_token() {
                Token::Quote => break,
                Token::EndOfFile => {
                    return Err(Self::error(
                        reader,
                        ParseErrorKind::Structural(StructuralError::UnterminatedString),
                    ));
                }
                token => {
                    if let Some(symbol) = token.symbol() {
                        raw.push(symbol);
                    }

                    if token == Token::ReverseSolidus {
                        match reader.get() {
                            Some(symbol) => raw.push(symbol),
                            None => {
                                return Err(Self::error(
                                    reader,
                                    ParseErrorKind::Structural(StructuralError::UnterminatedString),
                                ));
                            }
                        }
                    }
                }
            }
        }

        unicode::unescape(&raw).map_err(|error| {
            let (line, column) = reader.location();
            error.with_location(line, column)
        })
    }

    /// Parses a bare value: `true`, `false`, `null`, or a number.
    fn parse_value(&self, reader: &mut Reader) -> Result<Value> {
        let lexeme = Self::consume_value(reader);

        match lexeme.as_str() {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            "null" => Ok(Value::Null),
            _ => Self::convert_number(reader, lexeme),
        }
    }

    /// Converts a numeric lexeme via classification plus `str::parse`.
    ///
    /// A float that parses to infinity was out of range in the source text,
    /// so it fails rather than silently saturating.
    fn convert_number(reader: &Reader, lexeme: String) -> Result<Value> {
        let kind = match number::classify(&lexeme) {
            NumberType::SignedInteger => match lexeme.parse::<i64>() {
                Ok(value) => return Ok(Value::SignedInteger(value)),
                Err(_) => ValueError::NumberOutOfRange(lexeme),
            },
            NumberType::UnsignedInteger => match lexeme.parse::<u64>() {
                Ok(value) => return Ok(Value::UnsignedInteger(value)),
                Err(_) => ValueError::NumberOutOfRange(lexeme),
            },
            NumberType::FloatingPoint => match lexeme.parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(Value::FloatingPoint(value)),
                Ok(_) => ValueError::NumberOutOfRange(lexeme),
                Err(_) => ValueError::InvalidNumber(lexeme),
            },
            NumberType::Invalid => {
                if lexeme.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
                    ValueError::InvalidNumber(lexeme)
                } else {
                    ValueError::UnrecognizedLiteral(lexeme)
                }
            }
        };

        Err(Self::error(reader, ParseErrorKind::Value(kind)))
    }

    /// Accumulates the raw lexeme of a bare value.
    ///
    /// Stops at any token that cannot appear inside a literal or number.
    fn consume_value(reader: &mut Reader) -> String {
        let mut lexeme = String::new();

        loop {
            let token = reader.peek_token(0);

            let stop = matches!(
                token,
                Token::Comma
                    | Token::Solidus
                    | Token::CloseBracket
                    | Token::CloseBrace
                    | Token::EndOfFile
            ) || token.is_whitespace();

            if stop {
                break;
            }

            if let Some(symbol) = reader.get() {
                lexeme.push(symbol);
            }
        }

        lexeme
    }

    /// Skips whitespace and, when the dialect allows them, comments.
    fn consume_whitespace_and_comments(&self, reader: &mut Reader) -> Result<()> {
        Self::consume_whitespace(reader);

        while reader.peek_token(0) == Token::Solidus {
            self.consume_comment(reader)?;
            Self::consume_whitespace(reader);
        }

        Ok(())
    }

    fn consume_whitespace(reader: &mut Reader) {
        while reader.peek_token(0).is_whitespace() {
            reader.discard();
        }
    }

    /// Consumes one comment, whose opening solidus has already been peeked.
    fn consume_comment(&self, reader: &mut Reader) -> Result<()> {
        if !self.features.allow_comments {
            return Err(Self::error(
                reader,
                ParseErrorKind::Dialect(DialectError::CommentsNotAllowed),
            ));
        }

        reader.discard();

        match reader.get_token() {
            Token::Solidus => {
                loop {
                    match reader.get_token() {
                        Token::EndOfFile | Token::NewLine => break,
                        _ => {}
                    }
                }

                Ok(())
            }
            Token::Asterisk => {
                loop {
                    match reader.get_token() {
                        Token::EndOfFile => {
                            return Err(Self::error(
                                reader,
                                ParseErrorKind::Structural(StructuralError::UnterminatedComment),
                            ));
                        }
                        Token::Asterisk if reader.peek_token(0) == Token::Solidus => {
                            reader.discard();
                            break;
                        }
                        _ => {}
                    }
                }

                Ok(())
            }
            Token::EndOfFile => Err(Self::error(
                reader,
                ParseErrorKind::Structural(StructuralError::UnexpectedEof),
            )),
            token => Err(Self::error(
                reader,
                ParseErrorKind::Structural(StructuralError::InvalidCommentStart(
                    token.symbol().unwrap_or('?'),
                )),
            )),
        }
    }
}

impl Parser for JsonParser {
    fn parse_internal(&mut self, reader: &mut Reader) -> Result<Option<Value>> {
        self.consume_whitespace_and_comments(reader)?;

        // Empty or whitespace-only input parses as an empty document.
        if reader.eof() {
            return Ok(None);
        }

        let document = self.parse_json(reader)?;

        self.consume_whitespace_and_comments(reader)?;

        if let Some(symbol) = reader.peek(0) {
            return Err(Self::error(
                reader,
                ParseErrorKind::Structural(StructuralError::ExtraneousContent(symbol)),
            ));
        }

        if !document.is_object() && !document.is_array() && !self.features.allow_any_type {
            return Err(Self::error(
                reader,
                ParseErrorKind::Dialect(DialectError::ScalarNotAllowed),
            ));
        }

        Ok(Some(document))
    }
}
