//! Usage query construction.

use symref_common::{Result, error::Error, verify_arg};
use symref_index_core::{BooleanQuery, Occur, Query, QueryFactory, QueryKind, Term};

use crate::encoder::TermEncoder;
use crate::usage::UsageMask;

/// Builds the queries matching documents that reference a resource or a package.
///
/// The operator decides how the kinds of the mask combine:
///
/// - [`Occur::Should`]: a document matches if it uses the resource in *any* kind
///   of the mask. Each kind is encoded as its own term, so the result is a
///   boolean query with one clause per kind.
/// - [`Occur::Must`]: a document matches if it uses the resource in *all* kinds
///   of the mask. A document's reference term already carries all of its kinds
///   jointly, so the result is a single term matching the combined mask.
///
/// Any other operator is rejected.
pub struct UsagesQueryBuilder<'a> {
    encoder: &'a dyn TermEncoder,
    factory: &'a dyn QueryFactory,
    case_insensitive_field: Option<&'a str>,
}

impl<'a> UsagesQueryBuilder<'a> {
    pub fn new(encoder: &'a dyn TermEncoder, factory: &'a dyn QueryFactory) -> Self {
        UsagesQueryBuilder {
            encoder,
            factory,
            case_insensitive_field: None,
        }
    }

    /// Field handed to the factory for its case-insensitive kinds; defaults to
    /// the field of the encoded term.
    pub fn with_case_insensitive_field(mut self, field: &'a str) -> Self {
        self.case_insensitive_field = Some(field);
        self
    }

    /// Query for documents referencing `resource_name` (a binary name such as
    /// `java.util.Map$Entry`) with the kinds of `mask`.
    pub fn usages_query(
        &self,
        resource_name: &str,
        mask: UsageMask,
        operator: Occur,
    ) -> Result<Query> {
        verify_arg!(resource_name, !resource_name.is_empty());
        verify_arg!(mask, !mask.is_empty());
        self.compose(resource_name, mask, operator, false)
    }

    /// Query for documents referencing any resource declared directly in
    /// `package_name`, with the kinds of `mask`.
    ///
    /// Resources of subpackages do not match. An empty package name denotes the
    /// unnamed package.
    pub fn package_usages_query(
        &self,
        package_name: &str,
        mask: UsageMask,
        operator: Occur,
    ) -> Result<Query> {
        verify_arg!(mask, !mask.is_empty());
        let pattern = package_pattern(package_name);
        self.compose(&pattern, mask, operator, true)
    }

    fn compose(
        &self,
        name: &str,
        mask: UsageMask,
        operator: Occur,
        pattern: bool,
    ) -> Result<Query> {
        match operator {
            Occur::Should => {
                let mut query = BooleanQuery::new();
                for usage in mask.types() {
                    let term = self.encoder.references_term(name, usage.mask(), pattern);
                    query.add(self.create(&term, pattern)?, Occur::Should);
                }
                Ok(query.into())
            }
            Occur::Must => {
                let term = self.encoder.references_term(name, mask, pattern);
                self.create(&term, pattern)
            }
            Occur::MustNot => Err(Error::invalid_arg(
                "operator",
                format!("unsupported operator for usage queries: {operator}"),
            )),
        }
    }

    fn create(&self, term: &Term, pattern: bool) -> Result<Query> {
        let kind = if pattern {
            QueryKind::Regexp
        } else {
            QueryKind::Wildcard
        };
        let case_insensitive_field = self.case_insensitive_field.unwrap_or(term.field());
        self.factory
            .create_query(term.field(), case_insensitive_field, term.text(), kind)
    }
}

/// Regular expression matching the binary names declared directly in `package_name`.
pub fn package_pattern(package_name: &str) -> String {
    const SIMPLE_NAME: &str = r"[^\.]+";
    if package_name.is_empty() {
        SIMPLE_NAME.to_string()
    } else {
        format!(r"{}\.{SIMPLE_NAME}", regex::escape(package_name))
    }
}
