//! Search scopes and the package restriction they impose on usage queries.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use symref_index_core::{Occur, Query, Term};

use crate::packages::PackagesFilter;

/// Describes which part of the index a search covers.
pub trait SearchScopeType: fmt::Debug + Send + Sync {
    /// Packages the scope is restricted to, or `None` if it places no package
    /// restriction on the search.
    fn packages(&self) -> Option<&BTreeSet<String>> {
        None
    }

    fn is_sources(&self) -> bool;

    fn is_dependencies(&self) -> bool;
}

/// The unrestricted scopes every index session knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardScope {
    /// The project's own sources.
    Source,
    /// Binaries and sources of the project's dependencies.
    Dependencies,
}

impl StandardScope {
    pub fn name(&self) -> &'static str {
        match self {
            StandardScope::Source => "source",
            StandardScope::Dependencies => "dependencies",
        }
    }
}

impl SearchScopeType for StandardScope {
    fn is_sources(&self) -> bool {
        *self == StandardScope::Source
    }

    fn is_dependencies(&self) -> bool {
        *self == StandardScope::Dependencies
    }
}

/// A standard scope narrowed to the documents of a set of packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageScope {
    base: StandardScope,
    packages: BTreeSet<String>,
}

impl PackageScope {
    pub fn new<I, S>(base: StandardScope, packages: I) -> PackageScope
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PackageScope {
            base,
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn base(&self) -> StandardScope {
        self.base
    }
}

impl SearchScopeType for PackageScope {
    fn packages(&self) -> Option<&BTreeSet<String>> {
        Some(&self.packages)
    }

    fn is_sources(&self) -> bool {
        self.base.is_sources()
    }

    fn is_dependencies(&self) -> bool {
        self.base.is_dependencies()
    }
}

/// Union of the package sets the scope elements declare, or `None` when no
/// element declares one.
pub fn scope_packages(scope: &[&dyn SearchScopeType]) -> Option<BTreeSet<String>> {
    scope
        .iter()
        .filter_map(|element| element.packages())
        .fold(None, |acc: Option<BTreeSet<String>>, packages| {
            let mut acc = acc.unwrap_or_default();
            acc.extend(packages.iter().cloned());
            Some(acc)
        })
}

/// Restricts `query` to the documents of the packages `scope` declares.
///
/// Returns `None` when the scope declares packages but their union is empty:
/// nothing can match and the caller should not search at all. A scope that
/// declares no packages leaves the query unchanged. A single package becomes a
/// required term clause next to the query; several packages become a
/// [`PackagesFilter`] over the query.
pub fn scope_filter(
    query: Query,
    scope: &[&dyn SearchScopeType],
    package_field: &str,
) -> Option<Query> {
    let Some(packages) = scope_packages(scope) else {
        log::trace!("scope places no package restriction");
        return Some(query);
    };

    if packages.len() == 1
        && let Some(package) = packages.first()
    {
        log::debug!("scope restricted to package '{package}'");
        return Some(Query::boolean([
            (Query::Term(Term::new(package_field, package.as_str())), Occur::Must),
            (query, Occur::Must),
        ]));
    }
    match packages.len() {
        0 => {
            log::debug!("scope declares an empty package set, query skipped");
            None
        }
        count => {
            log::debug!("scope restricted to {count} packages");
            let filter = PackagesFilter::new(package_field, packages);
            Some(query.filtered(Arc::new(filter)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scopes() {
        assert!(StandardScope::Source.is_sources());
        assert!(!StandardScope::Source.is_dependencies());
        assert!(StandardScope::Dependencies.is_dependencies());
        assert_eq!(StandardScope::Dependencies.packages(), None);
        assert_eq!(StandardScope::Source.name(), "source");
    }

    #[test]
    fn test_package_scope_keeps_base() {
        let scope = PackageScope::new(StandardScope::Dependencies, ["b", "a", "b"]);
        assert_eq!(scope.base(), StandardScope::Dependencies);
        assert!(scope.is_dependencies());
        let packages: Vec<_> = scope.packages().unwrap().iter().cloned().collect();
        assert_eq!(packages, vec!["a", "b"]);
    }

    #[test]
    fn test_scope_packages_union() {
        let first = PackageScope::new(StandardScope::Source, ["com.b", "com.a"]);
        let second = PackageScope::new(StandardScope::Dependencies, ["com.a", "com.c"]);
        let union = scope_packages(&[&first, &StandardScope::Source, &second]).unwrap();
        assert_eq!(
            union.into_iter().collect::<Vec<_>>(),
            vec!["com.a", "com.b", "com.c"]
        );
        assert_eq!(scope_packages(&[&StandardScope::Source]), None);
        assert_eq!(scope_packages(&[]), None);
    }
}
