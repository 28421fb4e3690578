//! Index-side view of a compiled source file.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use symref_index_core::Term;

use crate::encoder::TermEncoder;
use crate::usage::{UsageMask, UsageType};

/// The symbols one source file refers to and the package it declares.
///
/// ```json
/// { "package": "com.acme", "references": { "java.util.List": ["type-reference"] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageDocument {
    /// Package of the file; empty for the unnamed package.
    #[serde(default)]
    pub package: String,
    /// Usage kinds per referenced binary name.
    #[serde(default)]
    pub references: BTreeMap<String, BTreeSet<UsageType>>,
}

impl UsageDocument {
    pub fn new(package: impl Into<String>) -> UsageDocument {
        UsageDocument {
            package: package.into(),
            references: BTreeMap::new(),
        }
    }

    pub fn with_reference(
        mut self,
        name: impl Into<String>,
        usages: impl IntoIterator<Item = UsageType>,
    ) -> Self {
        self.add_reference(name, usages);
        self
    }

    /// Records that the file refers to `name` with `usages`, in addition to any
    /// kinds already recorded.
    pub fn add_reference(
        &mut self,
        name: impl Into<String>,
        usages: impl IntoIterator<Item = UsageType>,
    ) {
        self.references
            .entry(name.into())
            .or_default()
            .extend(usages);
    }

    pub fn mask_of(&self, name: &str) -> UsageMask {
        self.references
            .get(name)
            .map(|usages| usages.iter().copied().collect())
            .unwrap_or_default()
    }

    /// The terms to index for this file: the package term followed by one
    /// references term per referenced name. Names recorded without any usage
    /// kind produce no term.
    pub fn terms(&self, encoder: &dyn TermEncoder, package_field: &str) -> Vec<Term> {
        let mut terms = Vec::with_capacity(self.references.len() + 1);
        terms.push(Term::new(package_field, self.package.as_str()));
        for (name, usages) in &self.references {
            let mask: UsageMask = usages.iter().copied().collect();
            if !mask.is_empty() {
                terms.push(encoder.document_term(name, mask));
            }
        }
        terms
    }
}
