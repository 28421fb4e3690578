//! Query expression trees.
//!
//! A [`Query`] is a read-only description of which documents to match. It is
//! built by the usage query builders, optionally wrapped by scope restrictions,
//! and finally handed to an executor such as [`crate::search::execute`].

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use symref_common::{Result, error::Error};

use crate::filter::DocumentFilter;
use crate::term::Term;

/// How a clause participates in a [`BooleanQuery`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Occur {
    /// Logical OR: the clause may match.
    Should,
    /// Logical AND: the clause must match.
    Must,
    /// The clause must not match.
    MustNot,
}

impl Occur {
    pub const fn name(&self) -> &'static str {
        match self {
            Occur::Should => "should",
            Occur::Must => "must",
            Occur::MustNot => "must-not",
        }
    }
}

impl TryFrom<&str> for Occur {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "should" => Ok(Occur::Should),
            "must" => Ok(Occur::Must),
            "must-not" => Ok(Occur::MustNot),
            _ => Err(Error::invalid_arg(
                "occur",
                format!("Unrecognized operator: {name}"),
            )),
        }
    }
}

impl fmt::Display for Occur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The matching mode requested from a [`QueryFactory`](crate::QueryFactory).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum QueryKind {
    /// The term text equals the value.
    Exact,
    /// The term text starts with the value.
    Prefix,
    /// Case-insensitive prefix match against the case-insensitive field.
    CaseInsensitivePrefix,
    /// Glob match: `*` matches any sequence, `?` any single character.
    Wildcard,
    /// Full regular expression match.
    Regexp,
    /// Case-insensitive regular expression match against the case-insensitive field.
    CaseInsensitiveRegexp,
}

impl QueryKind {
    pub const fn name(&self) -> &'static str {
        match self {
            QueryKind::Exact => "exact",
            QueryKind::Prefix => "prefix",
            QueryKind::CaseInsensitivePrefix => "case-insensitive-prefix",
            QueryKind::Wildcard => "wildcard",
            QueryKind::Regexp => "regexp",
            QueryKind::CaseInsensitiveRegexp => "case-insensitive-regexp",
        }
    }
}

impl TryFrom<&str> for QueryKind {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "exact" => Ok(QueryKind::Exact),
            "prefix" => Ok(QueryKind::Prefix),
            "case-insensitive-prefix" => Ok(QueryKind::CaseInsensitivePrefix),
            "wildcard" => Ok(QueryKind::Wildcard),
            "regexp" => Ok(QueryKind::Regexp),
            "case-insensitive-regexp" => Ok(QueryKind::CaseInsensitiveRegexp),
            _ => Err(Error::invalid_arg(
                "kind",
                format!("Unrecognized query kind: {name}"),
            )),
        }
    }
}

/// A query node.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Matches the postings of exactly this term.
    Term(Term),
    /// Matches every term of the field whose text starts with the term text.
    Prefix(Term),
    /// Glob pattern over the term text.
    Wildcard(PatternQuery),
    /// Regular expression over the term text.
    Regexp(PatternQuery),
    Boolean(BooleanQuery),
    Filtered(FilteredQuery),
}

impl Query {
    pub fn boolean(clauses: impl IntoIterator<Item = (Query, Occur)>) -> Query {
        Query::Boolean(BooleanQuery::from_clauses(clauses))
    }

    /// Wraps `self` so that only documents accepted by `filter` can match.
    pub fn filtered(self, filter: Arc<dyn DocumentFilter>) -> Query {
        Query::Filtered(FilteredQuery::new(self, filter))
    }

    pub fn as_boolean(&self) -> Option<&BooleanQuery> {
        match self {
            Query::Boolean(query) => Some(query),
            _ => None,
        }
    }

    pub fn as_filtered(&self) -> Option<&FilteredQuery> {
        match self {
            Query::Filtered(query) => Some(query),
            _ => None,
        }
    }

    /// Returns the pattern node of a wildcard or regexp query.
    pub fn as_pattern(&self) -> Option<&PatternQuery> {
        match self {
            Query::Wildcard(query) | Query::Regexp(query) => Some(query),
            _ => None,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Term(term) => write!(f, "{term}"),
            Query::Prefix(term) => write!(f, "{term}*"),
            Query::Wildcard(query) => write!(f, "{}", query.term()),
            Query::Regexp(query) => {
                write!(f, "{}:/{}/", query.term().field(), query.term().text())
            }
            Query::Boolean(query) => {
                f.write_str("(")?;
                for (i, clause) in query.clauses().iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    match clause.occur {
                        Occur::Must => f.write_str("+")?,
                        Occur::MustNot => f.write_str("-")?,
                        Occur::Should => {}
                    }
                    write!(f, "{}", clause.query)?;
                }
                f.write_str(")")
            }
            Query::Filtered(query) => {
                write!(f, "filtered({})->{:?}", query.query(), query.filter())
            }
        }
    }
}

/// A compiled wildcard or regular expression query over the text of one field.
///
/// The pattern always matches the whole term text. `literal_prefix` is a
/// prefix every matching text shares; executors use it to bound the range of
/// the term dictionary that has to be visited.
#[derive(Debug, Clone)]
pub struct PatternQuery {
    term: Term,
    matcher: Regex,
    literal_prefix: String,
}

impl PatternQuery {
    pub(crate) fn new(term: Term, matcher: Regex, literal_prefix: String) -> PatternQuery {
        PatternQuery {
            term,
            matcher,
            literal_prefix,
        }
    }

    /// The field and the pattern as given to the factory.
    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn field(&self) -> &str {
        self.term.field()
    }

    pub fn literal_prefix(&self) -> &str {
        &self.literal_prefix
    }

    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

impl PartialEq for PatternQuery {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term && self.matcher.as_str() == other.matcher.as_str()
    }
}

/// One clause of a [`BooleanQuery`].
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanClause {
    pub query: Query,
    pub occur: Occur,
}

/// A boolean combination of clauses.
///
/// With at least one `Must` clause, `Should` clauses are optional; otherwise at
/// least one `Should` clause has to match. `MustNot` clauses exclude documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BooleanQuery {
    clauses: Vec<BooleanClause>,
}

impl BooleanQuery {
    pub fn new() -> BooleanQuery {
        BooleanQuery::default()
    }

    pub fn from_clauses(clauses: impl IntoIterator<Item = (Query, Occur)>) -> BooleanQuery {
        BooleanQuery {
            clauses: clauses
                .into_iter()
                .map(|(query, occur)| BooleanClause { query, occur })
                .collect(),
        }
    }

    pub fn add(&mut self, query: Query, occur: Occur) {
        self.clauses.push(BooleanClause { query, occur });
    }

    pub fn clauses(&self) -> &[BooleanClause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl From<BooleanQuery> for Query {
    fn from(query: BooleanQuery) -> Self {
        Query::Boolean(query)
    }
}

/// A query whose matches are restricted to the documents of a [`DocumentFilter`].
#[derive(Debug, Clone)]
pub struct FilteredQuery {
    query: Box<Query>,
    filter: Arc<dyn DocumentFilter>,
}

impl FilteredQuery {
    pub fn new(query: Query, filter: Arc<dyn DocumentFilter>) -> FilteredQuery {
        FilteredQuery {
            query: Box::new(query),
            filter,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn filter(&self) -> &Arc<dyn DocumentFilter> {
        &self.filter
    }
}

impl PartialEq for FilteredQuery {
    fn eq(&self, other: &Self) -> bool {
        self.query == other.query && Arc::ptr_eq(&self.filter, &other.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occur_names_round_trip() {
        for occur in [Occur::Should, Occur::Must, Occur::MustNot] {
            assert_eq!(Occur::try_from(occur.name()).unwrap(), occur);
        }
        assert!(Occur::try_from("filter").is_err());
    }

    #[test]
    fn test_query_kind_names() {
        assert_eq!(QueryKind::try_from("regexp").unwrap(), QueryKind::Regexp);
        assert_eq!(QueryKind::Wildcard.name(), "wildcard");
        assert!(QueryKind::try_from("camel-case").is_err());
    }

    #[test]
    fn test_boolean_display() {
        let query = Query::boolean([
            (Query::Term(Term::new("packageName", "com.foo")), Occur::Must),
            (Query::Prefix(Term::new("references", "com.foo.")), Occur::Should),
            (Query::Term(Term::new("references", "x")), Occur::MustNot),
        ]);
        assert_eq!(
            query.to_string(),
            "(+packageName:com.foo references:com.foo.* -references:x)"
        );
    }
}
