//! Dialect flags relaxing strict JSON grammar.

/// A set of independent toggles supplied when constructing a [`JsonParser`].
///
/// The default is strict RFC-8259-like behavior with every flag disabled.
/// Flags combine via [`Features::union`] or the chainable setters; the set is
/// immutable for the lifetime of one parser instance.
///
/// [`JsonParser`]: crate::parser::JsonParser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    /// Allow `//` line comments and `/* */` block comments
    pub allow_comments: bool,
    /// Allow a comma after the last element of an object or array
    pub allow_trailing_comma: bool,
    /// Allow a bare scalar (string, number, literal) at the top level
    pub allow_any_type: bool,
}

impl Features {
    /// The strict dialect: no relaxations.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Every relaxation enabled.
    pub fn all() -> Self {
        Self {
            allow_comments: true,
            allow_trailing_comma: true,
            allow_any_type: true,
        }
    }

    pub fn with_comments(mut self) -> Self {
        self.allow_comments = true;
        self
    }

    pub fn with_trailing_comma(mut self) -> Self {
        self.allow_trailing_comma = true;
        self
    }

    pub fn with_any_type(mut self) -> Self {
        self.allow_any_type = true;
        self
    }

    /// Set union of two feature sets.
    pub fn union(self, other: Self) -> Self {
        Self {
            allow_comments: self.allow_comments || other.allow_comments,
            allow_trailing_comma: self.allow_trailing_comma || other.allow_trailing_comma,
            allow_any_type: self.allow_any_type || other.allow_any_type,
        }
    }
}
