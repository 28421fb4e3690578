use roaring::RoaringBitmap;
use symref_common::{Result, error::Error};

use crate::doc_id_set::{DocId, DocIdSet};

/// Mutable accumulator for a [`DocIdSet`], sized to a segment's document count.
///
/// The builder is local to a single computation and is frozen by [`build`](Self::build).
pub struct DocIdSetBuilder {
    bits: RoaringBitmap,
    span: DocId,
}

impl DocIdSetBuilder {
    pub fn new(span: DocId) -> DocIdSetBuilder {
        DocIdSetBuilder {
            bits: RoaringBitmap::new(),
            span,
        }
    }

    #[inline]
    pub fn span(&self) -> DocId {
        self.span
    }

    /// Marks `doc` as present. Returns `false` if it was already set.
    ///
    /// Panics: if `doc >= span`.
    #[inline]
    pub fn set(&mut self, doc: DocId) -> bool {
        assert!(doc < self.span, "doc id {doc} out of span {}", self.span);
        self.bits.insert(doc)
    }

    /// Marks every id of an ascending postings sequence.
    ///
    /// Returns the number of newly set ids.
    pub fn extend_sorted(&mut self, doc_ids: impl IntoIterator<Item = DocId>) -> u64 {
        let before = self.bits.len();
        for doc in doc_ids {
            self.set(doc);
        }
        self.bits.len() - before
    }

    /// Marks every id of an ascending postings sequence read from an index.
    ///
    /// Fails with `InvalidFormat` on the first id outside the span; ids before
    /// it remain set.
    pub fn try_extend_sorted(&mut self, doc_ids: impl IntoIterator<Item = DocId>) -> Result<u64> {
        let before = self.bits.len();
        for doc in doc_ids {
            if doc >= self.span {
                return Err(Error::invalid_format(
                    "postings",
                    format!("doc id {doc} out of span {}", self.span),
                ));
            }
            self.bits.insert(doc);
        }
        Ok(self.bits.len() - before)
    }

    /// Number of ids set so far.
    pub fn count(&self) -> u64 {
        self.bits.len()
    }

    pub fn build(self) -> DocIdSet {
        DocIdSet::new(self.bits, self.span)
    }
}
