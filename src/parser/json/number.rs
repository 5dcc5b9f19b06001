//! Classification of raw numeric lexemes.
//!
//! Classification only selects which conversion to attempt; the actual
//! parsing and overflow detection happen at the conversion site.

/// The conversion a numeric lexeme calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
    SignedInteger,
    UnsignedInteger,
    FloatingPoint,
    Invalid,
}

/// Classifies a raw lexeme against the JSON number grammar.
///
/// Rejects empty lexemes, non-digit starts, and octal-looking literals
/// (a leading zero followed by another digit). A fraction requires at least
/// one digit between the point and any exponent marker; a fraction or an
/// exponent marker makes the number floating point.
pub fn classify(lexeme: &str) -> NumberType {
    let (is_signed, signless) = match lexeme.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, lexeme),
    };

    let mut digits = signless.chars();

    match digits.next() {
        Some(first) if first.is_ascii_digit() => {
            let is_octal = first == '0' && digits.next().is_some_and(|c| c.is_ascii_digit());

            if is_octal {
                return NumberType::Invalid;
            }
        }
        _ => return NumberType::Invalid,
    }

    let point = signless.find('.');
    let exponent = signless.find(['e', 'E']);

    if let Some(point) = point {
        let fraction_end = exponent.unwrap_or(signless.len());

        if point + 1 >= fraction_end {
            return NumberType::Invalid;
        }

        return NumberType::FloatingPoint;
    } else if exponent.is_some() {
        return NumberType::FloatingPoint;
    }

    if is_signed {
        NumberType::SignedInteger
    } else {
        NumberType::UnsignedInteger
    }
}
