use std::fmt;

use roaring::RoaringBitmap;

/// Identifier of a document within a single index segment.
pub type DocId = u32;

/// An immutable, ordered set of document ids constrained to the domain [0, span).
///
/// `span` is the document count of the segment the set was computed for.
/// Binary operations are only defined between sets of the same span.
#[derive(Clone, PartialEq)]
pub struct DocIdSet {
    bits: RoaringBitmap,
    span: DocId,
}

impl DocIdSet {
    pub(crate) fn new(bits: RoaringBitmap, span: DocId) -> DocIdSet {
        debug_assert!(bits.max().is_none_or(|max| max < span));
        DocIdSet { bits, span }
    }

    /// Create an empty set over [0, span).
    pub fn empty(span: DocId) -> DocIdSet {
        DocIdSet {
            bits: RoaringBitmap::new(),
            span,
        }
    }

    /// Create a full set over [0, span).
    pub fn full(span: DocId) -> DocIdSet {
        let mut bits = RoaringBitmap::new();
        bits.insert_range(0..span);
        DocIdSet { bits, span }
    }

    /// Build a set from an iterator of document ids.
    ///
    /// Ids ≥ span are ignored. The iterator does not need to be sorted.
    pub fn from_doc_ids(span: DocId, doc_ids: impl IntoIterator<Item = DocId>) -> DocIdSet {
        let bits = doc_ids.into_iter().filter(|&doc| doc < span).collect();
        DocIdSet { bits, span }
    }

    /// The exclusive upper bound of the document id domain.
    #[inline]
    pub fn span(&self) -> DocId {
        self.span
    }

    #[inline]
    pub fn contains(&self, doc: DocId) -> bool {
        self.bits.contains(doc)
    }

    /// Number of documents present in the set.
    #[inline]
    pub fn count(&self) -> u64 {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns an iterator over the document ids in ascending order.
    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.bits.iter()
    }

    /// Set union (A ∪ B) with another set of the same span.
    ///
    /// Panics: if `self.span != other.span`.
    pub fn union(&self, other: &DocIdSet) -> DocIdSet {
        assert_eq!(self.span, other.span);
        DocIdSet::new(&self.bits | &other.bits, self.span)
    }

    /// Set intersection (A ∩ B) with another set of the same span.
    ///
    /// Panics: if `self.span != other.span`.
    pub fn intersect(&self, other: &DocIdSet) -> DocIdSet {
        assert_eq!(self.span, other.span);
        DocIdSet::new(&self.bits & &other.bits, self.span)
    }

    /// Set difference (A \ B) with another set of the same span.
    ///
    /// Panics: if `self.span != other.span`.
    pub fn difference(&self, other: &DocIdSet) -> DocIdSet {
        assert_eq!(self.span, other.span);
        DocIdSet::new(&self.bits - &other.bits, self.span)
    }

    /// Complement within [0, span).
    pub fn invert(&self) -> DocIdSet {
        let mut bits = RoaringBitmap::new();
        bits.insert_range(0..self.span);
        bits -= &self.bits;
        DocIdSet::new(bits, self.span)
    }
}

impl fmt::Debug for DocIdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocIdSet")
            .field("span", &self.span)
            .field("doc_ids", &self.bits.iter().collect::<Vec<_>>())
            .finish()
    }
}
