//! Core index infrastructure for symbol usage queries.
//!
//! This crate provides the value types and traits that usage queries are built
//! from and executed against:
//!
//! - [`Term`]: a `(field, text)` pair identifying one postings list.
//! - [`Query`]: an expression tree over terms (exact, prefix, wildcard, regexp,
//!   boolean and filtered nodes).
//! - [`QueryFactory`]: the pattern-query constructor, which turns a field, a
//!   value and a [`QueryKind`] into a matchable query node.
//! - [`IndexSegment`]: read-only access to a committed index segment (document
//!   count, postings, sorted term enumeration).
//! - [`DocumentFilter`]: computes a [`DocIdSet`] restricting which documents a
//!   query may match.
//!
//! The [`memory`] module holds an immutable in-memory segment, and [`search`]
//! evaluates a query tree against any segment.

pub mod factory;
pub mod filter;
pub mod memory;
pub mod query;
pub mod search;
pub mod segment;
pub mod term;

pub use factory::{DefaultQueryFactory, QueryFactory};
pub use filter::DocumentFilter;
pub use memory::{MemorySegment, MemorySegmentBuilder};
pub use query::{BooleanClause, BooleanQuery, FilteredQuery, Occur, PatternQuery, Query, QueryKind};
pub use search::execute;
pub use segment::{IndexSegment, Postings, Terms};
pub use symref_doc_set::{DocId, DocIdSet};
pub use term::Term;
