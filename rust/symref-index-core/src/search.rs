//! Query evaluation against an [`IndexSegment`].
//!
//! The executor computes the full set of matching documents; it performs no
//! scoring. Pattern queries walk the term dictionary starting at their literal
//! prefix and stop as soon as the enumeration leaves the field or the prefix.

use symref_common::Result;
use symref_doc_set::{DocIdSet, DocIdSetBuilder};

use crate::query::{BooleanQuery, Occur, PatternQuery, Query};
use crate::segment::IndexSegment;
use crate::term::Term;

/// Evaluates `query` and returns the ids of every matching document.
pub fn execute(segment: &dyn IndexSegment, query: &Query) -> Result<DocIdSet> {
    let span = segment.max_doc();
    match query {
        Query::Term(term) => {
            let mut builder = DocIdSetBuilder::new(span);
            builder.try_extend_sorted(segment.postings(term)?)?;
            Ok(builder.build())
        }
        Query::Prefix(term) => collect_terms(segment, term, |_| true),
        Query::Wildcard(pattern) | Query::Regexp(pattern) => execute_pattern(segment, pattern),
        Query::Boolean(boolean) => execute_boolean(segment, boolean),
        Query::Filtered(filtered) => {
            let matches = execute(segment, filtered.query())?;
            if matches.is_empty() {
                return Ok(matches);
            }
            let allowed = filtered.filter().doc_id_set(segment)?;
            log::trace!(
                "filter {:?} allows {} of {} documents",
                filtered.filter(),
                allowed.count(),
                span
            );
            Ok(matches.intersect(&allowed))
        }
    }
}

fn execute_pattern(segment: &dyn IndexSegment, pattern: &PatternQuery) -> Result<DocIdSet> {
    let start = pattern.term().with_text(pattern.literal_prefix());
    collect_terms(segment, &start, |text| pattern.matches(text))
}

/// Unions the postings of every term of `start`'s field that begins with
/// `start`'s text and satisfies `accept`.
fn collect_terms(
    segment: &dyn IndexSegment,
    start: &Term,
    accept: impl Fn(&str) -> bool,
) -> Result<DocIdSet> {
    let mut builder = DocIdSetBuilder::new(segment.max_doc());
    let mut visited = 0usize;
    for term in segment.terms_from(start)? {
        if term.field() != start.field() || !term.text().starts_with(start.text()) {
            break;
        }
        visited += 1;
        if accept(term.text()) {
            builder.try_extend_sorted(segment.postings(&term)?)?;
        }
    }
    log::trace!(
        "visited {visited} terms from {start}, matched {} documents",
        builder.count()
    );
    Ok(builder.build())
}

fn execute_boolean(segment: &dyn IndexSegment, query: &BooleanQuery) -> Result<DocIdSet> {
    let span = segment.max_doc();
    let has_required = query.clauses().iter().any(|c| c.occur == Occur::Must);

    // Optional clauses cannot change the match set once a required clause exists.
    let mut matches: Option<DocIdSet> = None;
    for clause in query.clauses() {
        match (clause.occur, has_required) {
            (Occur::Must, _) => {
                if matches.as_ref().is_some_and(DocIdSet::is_empty) {
                    continue;
                }
                let clause_matches = execute(segment, &clause.query)?;
                matches = Some(match matches {
                    Some(acc) => acc.intersect(&clause_matches),
                    None => clause_matches,
                });
            }
            (Occur::Should, false) => {
                let clause_matches = execute(segment, &clause.query)?;
                matches = Some(match matches {
                    Some(acc) => acc.union(&clause_matches),
                    None => clause_matches,
                });
            }
            (Occur::Should, true) | (Occur::MustNot, _) => {}
        }
    }

    let mut matches = matches.unwrap_or_else(|| DocIdSet::empty(span));
    for clause in query.clauses() {
        if clause.occur == Occur::MustNot && !matches.is_empty() {
            matches = matches.difference(&execute(segment, &clause.query)?);
        }
    }
    Ok(matches)
}
