//! Encoding of symbol references into index terms.
//!
//! A references term is the referenced binary name followed by one slot
//! character per [`UsageType`], in slot order:
//!
//! ```text
//! java.util.List--++--        document side: type and method reference
//! java.util.List??+???        wildcard query: at least a type reference
//! java\.util\.[^\.]+..\+... regexp query: type reference of any class in java.util
//! ```
//!
//! A single document term carries every kind the document uses jointly, so a
//! query for several kinds at once is one term with several `+` slots rather
//! than an intersection of per-kind postings.

use symref_index_core::Term;

use crate::usage::{UsageMask, UsageType};

/// Slot value of a kind the document uses.
pub const USAGE_PRESENT: char = '+';
/// Slot value of a kind the document does not use.
pub const USAGE_ABSENT: char = '-';

const WILDCARD_PRESENT_SLOT: &str = "+";
const WILDCARD_ANY_SLOT: &str = "?";
const REGEXP_ANY_SLOT: &str = ".";
const REGEXP_PRESENT_SLOT: &str = "\\+";

/// Produces the terms of the references field.
pub trait TermEncoder: Send + Sync {
    /// Query-side term matching references to `name` that carry at least the
    /// kinds of `mask`.
    ///
    /// With `pattern == false` the text is a wildcard pattern and `name` is
    /// taken literally; with `pattern == true` the text is a regular expression
    /// and `name` is already a regular expression.
    fn references_term(&self, name: &str, mask: UsageMask, pattern: bool) -> Term;

    /// Index-side term recording that a document refers to `name` exactly
    /// with the kinds of `mask`.
    fn document_term(&self, name: &str, mask: UsageMask) -> Term;
}

/// The default slot encoding over a single references field.
#[derive(Debug, Clone)]
pub struct ReferencesTermEncoder {
    field: String,
}

impl ReferencesTermEncoder {
    pub fn new(field: impl Into<String>) -> ReferencesTermEncoder {
        ReferencesTermEncoder {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Splits a document-side term text into the binary name and its usage mask.
    ///
    /// Returns `None` when the text is not a document-side encoding.
    pub fn decode<'a>(&self, text: &'a str) -> Option<(&'a str, UsageMask)> {
        let split = text.len().checked_sub(UsageType::COUNT)?;
        if !text.is_char_boundary(split) {
            return None;
        }
        let (name, slots) = text.split_at(split);
        let mut mask = UsageMask::empty();
        for (slot, usage) in slots.chars().zip(UsageType::ALL) {
            match slot {
                USAGE_PRESENT => mask |= usage.mask(),
                USAGE_ABSENT => {}
                _ => return None,
            }
        }
        Some((name, mask))
    }
}

impl TermEncoder for ReferencesTermEncoder {
    fn references_term(&self, name: &str, mask: UsageMask, pattern: bool) -> Term {
        let mut text = String::with_capacity(name.len() + 2 * UsageType::COUNT);
        if pattern {
            text.push_str(name);
        } else {
            escape_wildcard(name, &mut text);
        }
        for usage in UsageType::ALL {
            text.push_str(match (mask.contains_type(usage), pattern) {
                (true, false) => WILDCARD_PRESENT_SLOT,
                (true, true) => REGEXP_PRESENT_SLOT,
                (false, false) => WILDCARD_ANY_SLOT,
                (false, true) => REGEXP_ANY_SLOT,
            });
        }
        Term::new(self.field.as_str(), text)
    }

    fn document_term(&self, name: &str, mask: UsageMask) -> Term {
        let mut text = String::with_capacity(name.len() + UsageType::COUNT);
        text.push_str(name);
        text.extend(UsageType::ALL.into_iter().map(|usage| {
            if mask.contains_type(usage) {
                USAGE_PRESENT
            } else {
                USAGE_ABSENT
            }
        }));
        Term::new(self.field.as_str(), text)
    }
}

fn escape_wildcard(name: &str, out: &mut String) {
    for c in name.chars() {
        if matches!(c, '*' | '?' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
}
