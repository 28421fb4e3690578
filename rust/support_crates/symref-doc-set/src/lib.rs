//! Document id sets: immutable bitmaps of matching documents within an index segment.

pub mod doc_id_set;
pub mod doc_id_set_builder;
#[cfg(test)]
mod tests;

pub use doc_id_set::{DocId, DocIdSet};
pub use doc_id_set_builder::DocIdSetBuilder;
