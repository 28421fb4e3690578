use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(field, text)` pair identifying one postings list in the index.
///
/// Terms are ordered lexicographically by field, then by text; this is the order
/// in which a segment enumerates its term dictionary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Term {
    field: String,
    text: String,
}

impl Term {
    /// Creates a term. The field must not be empty.
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Term {
        let field = field.into();
        debug_assert!(!field.is_empty(), "term field must not be empty");
        Term {
            field,
            text: text.into(),
        }
    }

    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns a term of the same field with a different text.
    pub fn with_text(&self, text: impl Into<String>) -> Term {
        Term {
            field: self.field.clone(),
            text: text.into(),
        }
    }

    pub fn into_parts(self) -> (String, String) {
        (self.field, self.text)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.text)
    }
}
