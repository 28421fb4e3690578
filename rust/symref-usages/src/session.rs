use std::collections::BTreeSet;
use std::sync::Arc;

use symref_common::Result;
use symref_index_core::{
    DefaultQueryFactory, DocIdSet, IndexSegment, Occur, Query, QueryFactory, Term, execute,
};

use crate::document::UsageDocument;
use crate::encoder::{ReferencesTermEncoder, TermEncoder};
use crate::options::SessionOptions;
use crate::packages::{self, PackageNameFilter};
use crate::query::UsagesQueryBuilder;
use crate::scope::{self, SearchScopeType};
use crate::usage::UsageMask;

/// Entry point for usage queries over one index.
///
/// The session owns the term encoder and the pattern-query constructor; both
/// are constructed once and shared by every query of the session. A session
/// is immutable and can be used from several threads at once.
#[derive(Clone)]
pub struct UsagesSession {
    encoder: Arc<dyn TermEncoder>,
    factory: Arc<dyn QueryFactory>,
    options: SessionOptions,
}

impl UsagesSession {
    /// Creates a session with the default encoder and query factory.
    pub fn new(options: SessionOptions) -> Result<UsagesSession> {
        let encoder = Arc::new(ReferencesTermEncoder::new(options.fields.references.as_str()));
        Self::with_collaborators(options, encoder, Arc::new(DefaultQueryFactory))
    }

    pub fn with_collaborators(
        options: SessionOptions,
        encoder: Arc<dyn TermEncoder>,
        factory: Arc<dyn QueryFactory>,
    ) -> Result<UsagesSession> {
        options.validate()?;
        Ok(UsagesSession {
            encoder,
            factory,
            options,
        })
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn encoder(&self) -> &dyn TermEncoder {
        self.encoder.as_ref()
    }

    fn query_builder(&self) -> UsagesQueryBuilder<'_> {
        UsagesQueryBuilder::new(self.encoder.as_ref(), self.factory.as_ref())
            .with_case_insensitive_field(&self.options.fields.references_case_insensitive)
    }

    /// See [`UsagesQueryBuilder::usages_query`].
    pub fn usages_query(
        &self,
        resource_name: &str,
        mask: UsageMask,
        operator: Occur,
    ) -> Result<Query> {
        self.query_builder().usages_query(resource_name, mask, operator)
    }

    /// See [`UsagesQueryBuilder::package_usages_query`].
    pub fn package_usages_query(
        &self,
        package_name: &str,
        mask: UsageMask,
        operator: Occur,
    ) -> Result<Query> {
        self.query_builder()
            .package_usages_query(package_name, mask, operator)
    }

    /// Restricts `query` to `scope` over this session's package field.
    pub fn scope_filter(&self, query: Query, scope: &[&dyn SearchScopeType]) -> Option<Query> {
        scope::scope_filter(query, scope, &self.options.fields.package_name)
    }

    pub fn package_filter(
        &self,
        prefix: Option<&str>,
        direct_only: bool,
    ) -> (PackageNameFilter, Term) {
        packages::package_filter(&self.options.fields.package_name, prefix, direct_only)
    }

    /// Package names of `segment` at or under `prefix`.
    pub fn package_names(
        &self,
        segment: &dyn IndexSegment,
        prefix: Option<&str>,
        direct_only: bool,
    ) -> Result<BTreeSet<String>> {
        packages::package_names(segment, &self.options.fields.package_name, prefix, direct_only)
    }

    /// Documents of `segment` within `scope` that refer to `resource_name`.
    pub fn find_usages(
        &self,
        segment: &dyn IndexSegment,
        resource_name: &str,
        mask: UsageMask,
        operator: Occur,
        scope: &[&dyn SearchScopeType],
    ) -> Result<DocIdSet> {
        let query = self.usages_query(resource_name, mask, operator)?;
        self.search(segment, query, scope)
    }

    /// Documents of `segment` within `scope` that refer to a resource declared
    /// directly in `package_name`.
    pub fn find_package_usages(
        &self,
        segment: &dyn IndexSegment,
        package_name: &str,
        mask: UsageMask,
        operator: Occur,
        scope: &[&dyn SearchScopeType],
    ) -> Result<DocIdSet> {
        let query = self.package_usages_query(package_name, mask, operator)?;
        self.search(segment, query, scope)
    }

    fn search(
        &self,
        segment: &dyn IndexSegment,
        query: Query,
        scope: &[&dyn SearchScopeType],
    ) -> Result<DocIdSet> {
        match self.scope_filter(query, scope) {
            Some(query) => {
                log::debug!("executing {query}");
                execute(segment, &query)
            }
            None => Ok(DocIdSet::empty(segment.max_doc())),
        }
    }

    /// Terms to index for `document` under this session's fields and encoder.
    pub fn document_terms(&self, document: &UsageDocument) -> Vec<Term> {
        document.terms(self.encoder.as_ref(), &self.options.fields.package_name)
    }
}

impl std::fmt::Debug for UsagesSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsagesSession")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
