//! Package names stored in the index.
//!
//! [`PackagesFilter`] turns a set of package names into the set of documents
//! declared in them. [`PackageNameFilter`] and [`StoppableTerms`] walk the
//! package field of the term dictionary to discover which packages exist at or
//! under a prefix.

use std::collections::BTreeSet;
use std::iter::FusedIterator;

use symref_common::Result;
use symref_doc_set::{DocIdSet, DocIdSetBuilder};
use symref_index_core::{DocumentFilter, IndexSegment, Term};

/// Accepts the documents whose package field equals any of a set of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagesFilter {
    field: String,
    packages: BTreeSet<String>,
}

impl PackagesFilter {
    pub fn new(field: impl Into<String>, packages: BTreeSet<String>) -> PackagesFilter {
        PackagesFilter {
            field: field.into(),
            packages,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn packages(&self) -> &BTreeSet<String> {
        &self.packages
    }
}

impl DocumentFilter for PackagesFilter {
    fn doc_id_set(&self, segment: &dyn IndexSegment) -> Result<DocIdSet> {
        let max_doc = segment.max_doc();
        if self.packages.is_empty() {
            return Ok(DocIdSet::empty(max_doc));
        }
        let mut builder = DocIdSetBuilder::new(max_doc);
        for package in &self.packages {
            let term = Term::new(self.field.as_str(), package.as_str());
            builder.try_extend_sorted(segment.postings(&term)?)?;
        }
        log::trace!(
            "{} packages select {} of {max_doc} documents",
            self.packages.len(),
            builder.count()
        );
        Ok(builder.build())
    }
}

/// Outcome of inspecting one term during a dictionary walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermStep<T> {
    /// The term yields a value.
    Produce(T),
    /// The term is of no interest; the walk continues.
    Skip,
    /// The walk has left the range of interest and ends.
    Stop,
}

/// Maps terms of the package field to package names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNameFilter {
    field: String,
    prefix: String,
    direct_only: bool,
}

impl PackageNameFilter {
    pub fn new(
        field: impl Into<String>,
        prefix: impl Into<String>,
        direct_only: bool,
    ) -> PackageNameFilter {
        PackageNameFilter {
            field: field.into(),
            prefix: prefix.into(),
            direct_only,
        }
    }

    /// Term the walk over the dictionary starts at.
    pub fn start_term(&self) -> Term {
        Term::new(self.field.as_str(), self.prefix.as_str())
    }

    /// Classifies `term`.
    ///
    /// A term of another field ends the walk. A term starting with the prefix
    /// produces its text; with `direct_only` the text is cut before the first
    /// `.` strictly after the prefix length, so that `com.foo.bar.Baz` under
    /// the prefix `com.foo` or `com.foo.` yields `com.foo.bar`. Names are not
    /// deduplicated.
    pub fn convert(&self, term: &Term) -> TermStep<String> {
        if term.field() != self.field {
            return TermStep::Stop;
        }
        let text = term.text();
        if !self.prefix.is_empty() && !text.starts_with(self.prefix.as_str()) {
            return TermStep::Skip;
        }
        // The character right after the prefix belongs to the child name, even
        // when it is a `.`.
        if self.direct_only
            && let Some((offset, _)) = text[self.prefix.len()..]
                .char_indices()
                .skip(1)
                .find(|&(_, c)| c == '.')
        {
            return TermStep::Produce(text[..self.prefix.len() + offset].to_string());
        }
        TermStep::Produce(text.to_string())
    }
}

/// Builds the package name filter for `prefix` and the term its walk starts at.
pub fn package_filter(
    field: &str,
    prefix: Option<&str>,
    direct_only: bool,
) -> (PackageNameFilter, Term) {
    let filter = PackageNameFilter::new(field, prefix.unwrap_or_default(), direct_only);
    let start = filter.start_term();
    (filter, start)
}

/// Adapts a term iterator through a three-way step function: produced values
/// are yielded, skipped terms are dropped, and the first stop ends the
/// iteration for good.
pub struct StoppableTerms<I, F> {
    terms: I,
    step: F,
    stopped: bool,
}

pub fn stoppable_terms<I, F, T>(terms: I, step: F) -> StoppableTerms<I, F>
where
    I: Iterator<Item = Term>,
    F: FnMut(&Term) -> TermStep<T>,
{
    StoppableTerms {
        terms,
        step,
        stopped: false,
    }
}

impl<I, F, T> Iterator for StoppableTerms<I, F>
where
    I: Iterator<Item = Term>,
    F: FnMut(&Term) -> TermStep<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.stopped {
            return None;
        }
        for term in self.terms.by_ref() {
            match (self.step)(&term) {
                TermStep::Produce(value) => return Some(value),
                TermStep::Skip => {}
                TermStep::Stop => {
                    log::trace!("term walk stopped at {term}");
                    break;
                }
            }
        }
        self.stopped = true;
        None
    }
}

impl<I, F, T> FusedIterator for StoppableTerms<I, F>
where
    I: Iterator<Item = Term>,
    F: FnMut(&Term) -> TermStep<T>,
{
}

/// Collects the package names present in `segment` at or under `prefix`.
///
/// With `direct_only`, names are reported only down to the first level below
/// the prefix.
pub fn package_names(
    segment: &dyn IndexSegment,
    field: &str,
    prefix: Option<&str>,
    direct_only: bool,
) -> Result<BTreeSet<String>> {
    let (filter, start) = package_filter(field, prefix, direct_only);
    let names: BTreeSet<String> =
        stoppable_terms(segment.terms_from(&start)?, |term| filter.convert(term)).collect();
    log::debug!(
        "found {} package names under '{}'",
        names.len(),
        start.text()
    );
    Ok(names)
}
