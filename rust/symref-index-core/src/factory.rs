//! The pattern-query constructor.
//!
//! Usage query builders never construct pattern nodes themselves; they ask an
//! injected [`QueryFactory`] for a node of a given [`QueryKind`]. The
//! [`DefaultQueryFactory`] compiles wildcard and regexp patterns with the
//! `regex` crate, anchored so that the whole term text has to match.

use regex::{Regex, RegexBuilder};
use symref_common::{Result, error::Error, verify_arg};

use crate::query::{PatternQuery, Query, QueryKind};
use crate::term::Term;

/// Builds matchable query nodes from a field, a value and a [`QueryKind`].
///
/// `field` is used by the case-sensitive kinds, `case_insensitive_field` by the
/// case-insensitive ones; callers that only use one field pass it twice.
pub trait QueryFactory: Send + Sync {
    fn create_query(
        &self,
        field: &str,
        case_insensitive_field: &str,
        value: &str,
        kind: QueryKind,
    ) -> Result<Query>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultQueryFactory;

impl QueryFactory for DefaultQueryFactory {
    fn create_query(
        &self,
        field: &str,
        case_insensitive_field: &str,
        value: &str,
        kind: QueryKind,
    ) -> Result<Query> {
        verify_arg!(field, !field.is_empty());
        verify_arg!(case_insensitive_field, !case_insensitive_field.is_empty());
        let query = match kind {
            QueryKind::Exact => Query::Term(Term::new(field, value)),
            QueryKind::Prefix => Query::Prefix(Term::new(field, value)),
            QueryKind::CaseInsensitivePrefix => {
                Query::Prefix(Term::new(case_insensitive_field, value.to_lowercase()))
            }
            QueryKind::Wildcard => Query::Wildcard(wildcard_query(Term::new(field, value))?),
            QueryKind::Regexp => Query::Regexp(regexp_query(Term::new(field, value), false)?),
            QueryKind::CaseInsensitiveRegexp => Query::Regexp(regexp_query(
                Term::new(case_insensitive_field, value),
                true,
            )?),
        };
        log::trace!("created {} query {query}", kind.name());
        Ok(query)
    }
}

/// Compiles a glob pattern: `*` matches any sequence, `?` any single character
/// and `\` makes the next character literal.
pub fn wildcard_query(term: Term) -> Result<PatternQuery> {
    let (pattern, literal_prefix) = translate_wildcard(term.text());
    let matcher = compile(term.text(), &pattern, false)?;
    Ok(PatternQuery::new(term, matcher, literal_prefix))
}

/// Compiles a regular expression matching the whole term text.
pub fn regexp_query(term: Term, case_insensitive: bool) -> Result<PatternQuery> {
    let literal_prefix = if case_insensitive {
        String::new()
    } else {
        regexp_literal_prefix(term.text())
    };
    let matcher = compile(term.text(), term.text(), case_insensitive)?;
    Ok(PatternQuery::new(term, matcher, literal_prefix))
}

fn compile(source: &str, pattern: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(&format!("^(?:{pattern})$"))
        .case_insensitive(case_insensitive)
        .dot_matches_new_line(true)
        .build()
        .map_err(|e| Error::invalid_pattern(source, e))
}

/// Returns the equivalent regular expression and the literal text preceding the
/// first wildcard.
fn translate_wildcard(wildcard: &str) -> (String, String) {
    let mut pattern = String::with_capacity(wildcard.len() * 2);
    let mut prefix = String::new();
    let mut in_prefix = true;
    let mut chars = wildcard.chars();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                in_prefix = false;
                pattern.push_str(".*");
            }
            '?' => {
                in_prefix = false;
                pattern.push('.');
            }
            _ => {
                // A trailing backslash stands for itself.
                let literal = if c == '\\' { chars.next().unwrap_or('\\') } else { c };
                let mut buf = [0u8; 4];
                pattern.push_str(&regex::escape(literal.encode_utf8(&mut buf)));
                if in_prefix {
                    prefix.push(literal);
                }
            }
        }
    }
    (pattern, prefix)
}

/// Literal text every match of `pattern` starts with; empty when unknown.
fn regexp_literal_prefix(pattern: &str) -> String {
    if pattern.contains('|') {
        return String::new();
    }
    let mut prefix = String::new();
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        let literal = match c {
            '\\' => match chars.next() {
                Some(escaped) if is_regex_meta(escaped) => escaped,
                _ => break,
            },
            c if is_regex_meta(c) => break,
            c => c,
        };
        // An optional character cannot be part of the prefix.
        if matches!(chars.peek(), Some('*' | '?' | '{')) {
            break;
        }
        prefix.push(literal);
    }
    prefix
}

fn is_regex_meta(c: char) -> bool {
    matches!(
        c,
        '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '#'
            | '&' | '-' | '~'
    )
}
