//! An immutable in-memory index segment.
//!
//! [`MemorySegmentBuilder`] assigns consecutive document ids as documents are
//! added and records each document's terms; [`MemorySegmentBuilder::build`]
//! freezes the result into a [`MemorySegment`] whose term dictionary is kept in
//! `(field, text)` order.

use std::collections::BTreeMap;

use symref_common::{Result, error::Error};
use symref_doc_set::DocId;

use crate::segment::{IndexSegment, Postings, Terms};
use crate::term::Term;

/// Read-only segment holding its postings in a sorted map.
#[derive(Debug, Clone, Default)]
pub struct MemorySegment {
    postings: BTreeMap<Term, Vec<DocId>>,
    max_doc: DocId,
}

impl MemorySegment {
    pub fn builder() -> MemorySegmentBuilder {
        MemorySegmentBuilder::new()
    }

    /// Number of distinct terms in the dictionary.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Iterates over the dictionary with the document frequency of every term.
    pub fn term_stats(&self) -> impl Iterator<Item = (&Term, usize)> + '_ {
        self.postings.iter().map(|(term, docs)| (term, docs.len()))
    }
}

impl IndexSegment for MemorySegment {
    fn max_doc(&self) -> DocId {
        self.max_doc
    }

    fn postings(&self, term: &Term) -> Result<Postings<'_>> {
        Ok(match self.postings.get(term) {
            Some(docs) => Box::new(docs.iter().copied()),
            None => Box::new(std::iter::empty()),
        })
    }

    fn terms_from(&self, start: &Term) -> Result<Terms<'_>> {
        Ok(Box::new(
            self.postings.range(start.clone()..).map(|(term, _)| term.clone()),
        ))
    }
}

/// Accumulates documents for a [`MemorySegment`].
#[derive(Debug, Default)]
pub struct MemorySegmentBuilder {
    postings: BTreeMap<Term, Vec<DocId>>,
    next_doc: DocId,
}

impl MemorySegmentBuilder {
    pub fn new() -> MemorySegmentBuilder {
        MemorySegmentBuilder::default()
    }

    /// Adds a document with the given terms and returns its id.
    ///
    /// A term repeated within one document is recorded once.
    pub fn add_document(&mut self, terms: impl IntoIterator<Item = Term>) -> Result<DocId> {
        let doc = self.next_doc;
        self.next_doc = self
            .next_doc
            .checked_add(1)
            .ok_or_else(|| Error::invalid_operation("add_document: doc id space exhausted"))?;
        for term in terms {
            let docs = self.postings.entry(term).or_default();
            if docs.last() != Some(&doc) {
                docs.push(doc);
            }
        }
        Ok(doc)
    }

    /// Number of documents added so far.
    pub fn doc_count(&self) -> DocId {
        self.next_doc
    }

    pub fn build(self) -> MemorySegment {
        log::debug!(
            "built memory segment: {} documents, {} terms",
            self.next_doc,
            self.postings.len()
        );
        MemorySegment {
            postings: self.postings,
            max_doc: self.next_doc,
        }
    }
}
