//! Escape-sequence decoding for quoted strings.
//!
//! The quoted-string scanner accumulates raw characters without judging
//! escape validity; this module performs the deferred validation and
//! decoding. Unicode escapes accept `\uXXXX` (with UTF-16 surrogate pairs)
//! and `\UXXXXXXXX`. Decoding walks the lexeme with explicit cursor indices
//! so callers and the decoder never share iterator state.

use crate::error::{ParseError, ParseErrorKind, Result, ValueError};

const HIGH_SURROGATE_MIN: u32 = 0xD800;
const HIGH_SURROGATE_MAX: u32 = 0xDBFF;
const LOW_SURROGATE_MIN: u32 = 0xDC00;
const LOW_SURROGATE_MAX: u32 = 0xDFFF;

/// Decodes the raw contents of a quoted string.
///
/// Interprets the simple escapes `\" \\ \/ \b \f \n \r \t` and unicode
/// escapes, and rejects unknown escapes, truncated sequences, and raw
/// control characters below 0x20.
pub(crate) fn unescape(raw: &str) -> Result<String> {
    let symbols: Vec<char> = raw.chars().collect();
    let mut decoded = String::with_capacity(symbols.len());
    let mut index = 0;

    while let Some(&symbol) = symbols.get(index) {
        if symbol == '\\' {
            let (value, next) = decode_escape(&symbols, index)?;
            decoded.push(value);
            index = next;
        } else if u32::from(symbol) < 0x20 {
            return Err(value_error(ValueError::ControlCharacter(symbol)));
        } else {
            decoded.push(symbol);
            index += 1;
        }
    }

    Ok(decoded)
}

/// Decodes one escape sequence starting at the reverse solidus at `index`.
///
/// Returns the decoded character and the index of the first character after
/// the consumed sequence.
pub(crate) fn decode_escape(symbols: &[char], index: usize) -> Result<(char, usize)> {
    let escape = match symbols.get(index + 1) {
        Some(&escape) => escape,
        None => return Err(truncated(symbols, index)),
    };

    let simple = match escape {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'u' | 'U' => None,
        other => return Err(value_error(ValueError::InvalidEscape(other))),
    };

    match simple {
        Some(value) => Ok((value, index + 2)),
        None => decode_unicode_escape(symbols, index),
    }
}

/// Decodes a `\uXXXX` or `\UXXXXXXXX` escape starting at the reverse solidus
/// at `index`, returning the decoded character and the next cursor position.
///
/// A high surrogate must be followed by a `\uXXXX` low surrogate; unpaired
/// surrogates, malformed hex digits, and truncated sequences all fail.
pub(crate) fn decode_unicode_escape(symbols: &[char], index: usize) -> Result<(char, usize)> {
    match symbols.get(index + 1) {
        Some('u') => {
            let high = read_hex(symbols, index + 2, 4).ok_or_else(|| truncated(symbols, index))?;

            if (HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX).contains(&high) {
                decode_surrogate_pair(symbols, index, high)
            } else if (LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&high) {
                Err(truncated(symbols, index))
            } else {
                char::from_u32(high)
                    .map(|value| (value, index + 6))
                    .ok_or_else(|| truncated(symbols, index))
            }
        }
        Some('U') => {
            let codepoint =
                read_hex(symbols, index + 2, 8).ok_or_else(|| truncated(symbols, index))?;

            char::from_u32(codepoint)
                .map(|value| (value, index + 10))
                .ok_or_else(|| truncated(symbols, index))
        }
        _ => Err(truncated(symbols, index)),
    }
}

fn decode_surrogate_pair(symbols: &[char], index: usize, high: u32) -> Result<(char, usize)> {
    let continues = symbols.get(index + 6) == Some(&'\\') && symbols.get(index + 7) == Some(&'u');

    if !continues {
        return Err(truncated(symbols, index));
    }

    let low = read_hex(symbols, index + 8, 4).ok_or_else(|| truncated(symbols, index))?;

    if !(LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&low) {
        return Err(truncated(symbols, index));
    }

    let codepoint = 0x10000 + ((high - HIGH_SURROGATE_MIN) << 10) + (low - LOW_SURROGATE_MIN);

    char::from_u32(codepoint)
        .map(|value| (value, index + 12))
        .ok_or_else(|| truncated(symbols, index))
}

/// Reads `count` hexadecimal digits beginning at `index`.
fn read_hex(symbols: &[char], index: usize, count: usize) -> Option<u32> {
    let mut value = 0;

    for offset in 0..count {
        let digit = symbols.get(index + offset).and_then(|c| c.to_digit(16))?;
        value = (value << 4) | digit;
    }

    Some(value)
}

fn value_error(error: ValueError) -> ParseError {
    ParseError::new(ParseErrorKind::Value(error))
}

fn truncated(symbols: &[char], index: usize) -> ParseError {
    let sequence: String = symbols.iter().skip(index).take(12).collect();
    value_error(ValueError::InvalidUnicode(sequence))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::{decode_unicode_escape, unescape};

    fn symbols(raw: &str) -> Vec<char> {
        raw.chars().collect()
    }

    #[test]
    fn simple_escapes() {
        assert_eq!(unescape(r#"a\nb"#).unwrap(), "a\nb");
        assert_eq!(unescape(r#"\t\r\b\f"#).unwrap(), "\t\r\u{8}\u{c}");
        assert_eq!(unescape(r#"\"\\\/"#).unwrap(), "\"\\/");
    }

    #[test]
    fn basic_unicode_escape() {
        assert_eq!(unescape(r#"\u0041"#).unwrap(), "A");
        assert_eq!(unescape(r#"\u00e9"#).unwrap(), "\u{e9}");
        assert_eq!(unescape(r#"pre\u0041post"#).unwrap(), "preApost");
    }

    #[test]
    fn surrogate_pair_decodes_to_one_code_point() {
        assert_eq!(unescape(r#"\uD83D\uDE00"#).unwrap(), "\u{1F600}");
    }

    #[test]
    fn long_form_unicode_escape() {
        assert_eq!(unescape(r#"\U0001F600"#).unwrap(), "\u{1F600}");
        assert!(unescape(r#"\U00110000"#).is_err());
    }

    #[test]
    fn malformed_unicode_escapes_fail() {
        assert!(unescape(r#"\uZZZZ"#).is_err());
        assert!(unescape(r#"\u00"#).is_err());
        assert!(unescape(r#"\uD83D"#).is_err());
        assert!(unescape(r#"\uD83Dx"#).is_err());
        assert!(unescape(r#"\uD83DA"#).is_err());
        assert!(unescape(r#"\uDE00"#).is_err());
    }

    #[test]
    fn unknown_escape_fails() {
        assert!(unescape(r#"\q"#).is_err());
        assert!(unescape("\\").is_err());
    }

    #[test]
    fn raw_control_characters_fail() {
        assert!(unescape("a\u{1}b").is_err());
        assert!(unescape("a\nb").is_err());
    }

    #[test]
    fn cursor_advances_past_consumed_sequence() {
        let input = symbols(r#"\u0041rest"#);
        let (value, next) = decode_unicode_escape(&input, 0).unwrap();
        assert_eq!(value, 'A');
        assert_eq!(next, 6);

        let input = symbols(r#"\uD83D\uDE00rest"#);
        let (value, next) = decode_unicode_escape(&input, 0).unwrap();
        assert_eq!(value, '\u{1F600}');
        assert_eq!(next, 12);
    }
}
