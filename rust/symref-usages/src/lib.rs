//! Symbol usage queries over a references index.
//!
//! Every indexed document (a compiled source file) carries one `references`
//! term per symbol it refers to, whose text encodes the referenced binary name
//! and the kinds of usage ([`UsageType`]), plus a `packageName` term naming
//! the document's own package. This crate builds the queries that find
//! documents referencing a symbol or a package, restricts them to a
//! package-based search scope, and walks the package names stored in the
//! index.
//!
//! # Quick Start
//!
//! ```rust
//! use symref_index_core::{MemorySegment, Occur};
//! use symref_usages::{
//!     SessionOptions, StandardScope, UsageDocument, UsageMask, UsageType, UsagesSession,
//! };
//!
//! let session = UsagesSession::new(SessionOptions::default()).unwrap();
//!
//! let mut builder = MemorySegment::builder();
//! let document = UsageDocument::new("com.acme")
//!     .with_reference("java.util.List", [UsageType::TypeReference]);
//! builder.add_document(session.document_terms(&document)).unwrap();
//! let segment = builder.build();
//!
//! let hits = session
//!     .find_usages(
//!         &segment,
//!         "java.util.List",
//!         UsageMask::TYPE_REFERENCE,
//!         Occur::Should,
//!         &[&StandardScope::Source],
//!     )
//!     .unwrap();
//! assert_eq!(hits.doc_ids().collect::<Vec<_>>(), vec![0]);
//! ```

pub mod document;
pub mod encoder;
pub mod options;
pub mod packages;
pub mod query;
pub mod scope;
pub mod session;
pub mod usage;

pub use document::UsageDocument;
pub use encoder::{ReferencesTermEncoder, TermEncoder};
pub use options::{IndexFields, SessionOptions};
pub use packages::{
    PackageNameFilter, PackagesFilter, StoppableTerms, TermStep, package_filter, package_names,
    stoppable_terms,
};
pub use query::UsagesQueryBuilder;
pub use scope::{PackageScope, SearchScopeType, StandardScope, scope_filter};
pub use session::UsagesSession;
pub use usage::{UsageMask, UsageType};
