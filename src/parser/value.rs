//! The value tree produced by the parsers.
//!
//! A single enum represents every document shape: JSON documents map onto it
//! directly, INI documents use nested objects of string values.

use std::collections::HashMap;
use std::fmt;

use crate::formatter::json::escape_string;

/// A parsed value.
///
/// Once constructed a value's variant never changes; mutation replaces the
/// whole value. Object keys are unique by construction: inserting a duplicate
/// key overwrites the prior value (last write wins).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    SignedInteger(i64),
    UnsignedInteger(u64),
    FloatingPoint(f64),
    String(String),
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Self::SignedInteger(_) | Self::UnsignedInteger(_) | Self::FloatingPoint(_)
        )
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::SignedInteger(n) => Some(*n),
            Self::UnsignedInteger(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UnsignedInteger(n) => Some(*n),
            Self::SignedInteger(n) => u64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Numeric view of any number variant.
    #[allow(clippy::as_conversions)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::FloatingPoint(n) => Some(*n),
            Self::SignedInteger(n) => Some(*n as f64),
            Self::UnsignedInteger(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up a member of an object value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|members| members.get(key))
    }
}

impl fmt::Display for Value {
    /// Renders the value as compact JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::SignedInteger(n) => write!(f, "{}", n),
            Self::UnsignedInteger(n) => write!(f, "{}", n),
            Self::FloatingPoint(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Self::Array(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            Self::Object(members) => {
                write!(f, "{{")?;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "\"{}\":{}", escape_string(key), value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Structural comparison that treats equal numbers as equal across variants.
///
/// `42` parsed once may re-parse as the same unsigned integer, but a value
/// that round-trips through a float-producing path must still compare equal.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Object(l_map), Value::Object(r_map)) => {
            l_map.len() == r_map.len()
                && l_map
                    .iter()
                    .all(|(k, v)| r_map.get(k).is_some_and(|r_v| values_equal(v, r_v)))
        }
        (Value::Array(l_arr), Value::Array(r_arr)) => {
            l_arr.len() == r_arr.len()
                && l_arr
                    .iter()
                    .zip(r_arr.iter())
                    .all(|(l, r)| values_equal(l, r))
        }
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Null, Value::Null) => true,
        (l, r) if l.is_number() && r.is_number() => match (l, r) {
            (Value::FloatingPoint(_), _) | (_, Value::FloatingPoint(_)) => {
                match (l.as_f64(), r.as_f64()) {
                    (Some(l), Some(r)) => (l - r).abs() < f64::EPSILON,
                    _ => false,
                }
            }
            _ => l.as_i64() == r.as_i64() && l.as_u64() == r.as_u64(),
        },
        _ => false,
    }
}
