//! Read access to a committed index segment.

use symref_common::Result;
use symref_doc_set::DocId;

use crate::term::Term;

/// Document ids of one postings list, in ascending order.
pub type Postings<'a> = Box<dyn Iterator<Item = DocId> + 'a>;

/// Terms of the dictionary in `(field, text)` order.
pub type Terms<'a> = Box<dyn Iterator<Item = Term> + 'a>;

/// A read-only view of one index segment.
///
/// The segment is treated as an immutable snapshot for the lifetime of a query;
/// any number of queries may read it concurrently.
///
/// Failures to read postings or the term dictionary are reported as
/// `IndexUnavailable` errors and are never retried by the query engine. Postings
/// holding an id at or above [`max_doc`](IndexSegment::max_doc) fail the query
/// with `InvalidFormat`.
pub trait IndexSegment: Send + Sync {
    /// Number of documents in the segment; every doc id is below this value.
    fn max_doc(&self) -> DocId;

    /// Returns the postings of `term`, or an empty sequence if the term is absent.
    fn postings(&self, term: &Term) -> Result<Postings<'_>>;

    /// Enumerates every term greater than or equal to `start`, across all fields,
    /// in `(field, text)` order.
    fn terms_from(&self, start: &Term) -> Result<Terms<'_>>;
}
