//! Grammar-level classification of single characters.
//!
//! A `Token` is derived on demand from the character under the reader's
//! cursor; it is never stored. Multi-character lexemes (literals, numbers)
//! are accumulated by the parsers themselves.

use std::fmt;

/// Classification of the character at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    StartBrace,     // {
    CloseBrace,     // }
    StartBracket,   // [
    CloseBracket,   // ]
    Colon,          // :
    Comma,          // ,
    Quote,          // "
    ReverseSolidus, // \
    Solidus,        // /
    Asterisk,       // *
    Tab,            // \t
    NewLine,        // \n
    VerticalTab,    // \v
    CarriageReturn, // \r
    Space,          // ' '
    /// Sentinel for reading past the end of input
    EndOfFile,
    /// Any other character: literal or numeric content
    Other(char),
}

impl Token {
    /// Classifies a character, with `None` standing for end of input.
    pub fn classify(symbol: Option<char>) -> Self {
        match symbol {
            None => Self::EndOfFile,
            Some('{') => Self::StartBrace,
            Some('}') => Self::CloseBrace,
            Some('[') => Self::StartBracket,
            Some(']') => Self::CloseBracket,
            Some(':') => Self::Colon,
            Some(',') => Self::Comma,
            Some('"') => Self::Quote,
            Some('\\') => Self::ReverseSolidus,
            Some('/') => Self::Solidus,
            Some('*') => Self::Asterisk,
            Some('\t') => Self::Tab,
            Some('\n') => Self::NewLine,
            Some('\u{b}') => Self::VerticalTab,
            Some('\r') => Self::CarriageReturn,
            Some(' ') => Self::Space,
            Some(c) => Self::Other(c),
        }
    }

    /// The five whitespace classes the JSON grammar skips between tokens.
    pub fn is_whitespace(self) -> bool {
        matches!(
            self,
            Self::Tab | Self::NewLine | Self::VerticalTab | Self::CarriageReturn | Self::Space
        )
    }

    /// The raw character this token classifies, if any.
    pub fn symbol(self) -> Option<char> {
        match self {
            Self::StartBrace => Some('{'),
            Self::CloseBrace => Some('}'),
            Self::StartBracket => Some('['),
            Self::CloseBracket => Some(']'),
            Self::Colon => Some(':'),
            Self::Comma => Some(','),
            Self::Quote => Some('"'),
            Self::ReverseSolidus => Some('\\'),
            Self::Solidus => Some('/'),
            Self::Asterisk => Some('*'),
            Self::Tab => Some('\t'),
            Self::NewLine => Some('\n'),
            Self::VerticalTab => Some('\u{b}'),
            Self::CarriageReturn => Some('\r'),
            Self::Space => Some(' '),
            Self::EndOfFile => None,
            Self::Other(c) => Some(c),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "EOF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Token;

    #[test]
    fn classifies_structural_characters() {
        assert_eq!(Token::classify(Some('{')), Token::StartBrace);
        assert_eq!(Token::classify(Some('}')), Token::CloseBrace);
        assert_eq!(Token::classify(Some('[')), Token::StartBracket);
        assert_eq!(Token::classify(Some(']')), Token::CloseBracket);
        assert_eq!(Token::classify(Some(':')), Token::Colon);
        assert_eq!(Token::classify(Some(',')), Token::Comma);
        assert_eq!(Token::classify(None), Token::EndOfFile);
        assert_eq!(Token::classify(Some('x')), Token::Other('x'));
    }

    #[test]
    fn whitespace_classes() {
        for c in [' ', '\t', '\n', '\r', '\u{b}'] {
            assert!(Token::classify(Some(c)).is_whitespace(), "{:?}", c);
        }
        assert!(!Token::classify(Some('a')).is_whitespace());
        assert!(!Token::classify(None).is_whitespace());
    }

    #[test]
    fn symbol_round_trips() {
        for c in ['{', '}', '[', ']', ':', ',', '"', '\\', '/', '*', 'q'] {
            assert_eq!(Token::classify(Some(c)).symbol(), Some(c));
        }
        assert_eq!(Token::EndOfFile.symbol(), None);
    }
}
