//! Raw character access over an input buffer.
//!
//! The reader knows nothing about any grammar. It exposes peek/get/discard
//! primitives with line and column bookkeeping; reaching the end of input is
//! a normal condition reported through `eof()` and the `EndOfFile` token, not
//! an error.

use crate::token::Token;

/// Cursor over the characters of one input buffer.
///
/// Created fresh for every parse invocation and discarded afterwards; it is
/// never shared across invocations or threads.
#[derive(Debug)]
pub struct Reader {
    /// Input text as a character array
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Location tracking for error messages
    line: usize,
    column: usize,
}

impl Reader {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Inspects the character at cursor + offset without consuming it.
    ///
    /// Does not mutate line/column bookkeeping.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Classifies the character at cursor + offset.
    pub fn peek_token(&self, offset: usize) -> Token {
        Token::classify(self.peek(offset))
    }

    /// Consumes and returns the current character, advancing the cursor.
    ///
    /// A newline increments the line and resets the column; any other
    /// character increments the column. Returns `None` at end of input.
    pub fn get(&mut self) -> Option<char> {
        let symbol = self.peek(0)?;

        if symbol == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.position += 1;
        Some(symbol)
    }

    /// Classifies and consumes the current character.
    pub fn get_token(&mut self) -> Token {
        Token::classify(self.get())
    }

    /// Consumes the current character without returning it.
    ///
    /// Used when the caller already knows its identity from a prior peek.
    pub fn discard(&mut self) {
        let _ = self.get();
    }

    /// True once the cursor has passed the last character.
    pub fn eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Current (line, column), 1-based.
    pub fn location(&self) -> (usize, usize) {
        (self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::Reader;
    use crate::token::Token;

    #[test]
    fn peek_does_not_consume() {
        let reader = Reader::new("ab");
        assert_eq!(reader.peek(0), Some('a'));
        assert_eq!(reader.peek(1), Some('b'));
        assert_eq!(reader.peek(2), None);
        assert_eq!(reader.location(), (1, 1));
    }

    #[test]
    fn get_advances_and_tracks_columns() {
        let mut reader = Reader::new("ab");
        assert_eq!(reader.get(), Some('a'));
        assert_eq!(reader.location(), (1, 2));
        assert_eq!(reader.get(), Some('b'));
        assert_eq!(reader.get(), None);
        assert!(reader.eof());
    }

    #[test]
    fn newline_resets_column() {
        let mut reader = Reader::new("a\nb");
        reader.discard();
        assert_eq!(reader.location(), (1, 2));
        reader.discard();
        assert_eq!(reader.location(), (2, 1));
        reader.discard();
        assert_eq!(reader.location(), (2, 2));
    }

    #[test]
    fn eof_is_a_sentinel_not_an_error() {
        let mut reader = Reader::new("");
        assert!(reader.eof());
        assert_eq!(reader.peek_token(0), Token::EndOfFile);
        assert_eq!(reader.get_token(), Token::EndOfFile);
        assert_eq!(reader.location(), (1, 1));
    }

    #[test]
    fn discard_consumes_one_character() {
        let mut reader = Reader::new("xy");
        reader.discard();
        assert_eq!(reader.peek(0), Some('y'));
    }
}
