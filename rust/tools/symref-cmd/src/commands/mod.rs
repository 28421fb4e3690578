//! Command implementations for symref-cmd

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use symref_index_core::{DocIdSet, MemorySegment, Occur};
use symref_usages::{PackageScope, SessionOptions, StandardScope, UsageMask, UsagesSession};

use crate::listing::Listing;

pub mod inspect;
pub mod packages;
pub mod usages;

#[derive(Args)]
pub struct IndexArgs {
    /// Path to the JSON document listing to index
    #[arg(short, long)]
    pub index: PathBuf,

    /// Path to a JSON file with session options (index field names)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Comma separated usage kinds (e.g. type-reference,method-reference) or "all"
    #[arg(short, long, default_value = "all")]
    pub kinds: String,

    /// "should" matches any of the kinds, "must" requires all of them
    #[arg(long, default_value = "should")]
    pub operator: String,

    /// Restrict the search to documents of this package (can be specified multiple times)
    #[arg(long)]
    pub in_package: Vec<String>,

    /// Search the dependencies scope instead of the sources scope
    #[arg(long)]
    pub dependencies: bool,
}

impl SearchArgs {
    pub fn mask(&self) -> Result<UsageMask> {
        Ok(UsageMask::parse(&self.kinds)?)
    }

    pub fn operator(&self) -> Result<Occur> {
        Ok(Occur::try_from(self.operator.as_str())?)
    }

    pub fn base_scope(&self) -> StandardScope {
        if self.dependencies {
            StandardScope::Dependencies
        } else {
            StandardScope::Source
        }
    }

    /// Package restriction of the search, if any packages were given.
    pub fn package_scope(&self) -> Option<PackageScope> {
        (!self.in_package.is_empty())
            .then(|| PackageScope::new(self.base_scope(), self.in_package.iter().cloned()))
    }
}

/// An index listing loaded into memory together with its session.
pub struct OpenIndex {
    pub session: UsagesSession,
    pub listing: Listing,
    pub segment: MemorySegment,
}

impl IndexArgs {
    pub fn open(&self) -> Result<OpenIndex> {
        let options = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                SessionOptions::from_json(&json)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => SessionOptions::default(),
        };
        let session = UsagesSession::new(options)?;
        let listing = Listing::load(&self.index)?;
        let segment = listing.index(&session)?;
        tracing::info!(
            "Indexed {} documents from {}",
            listing.documents.len(),
            self.index.display()
        );
        Ok(OpenIndex {
            session,
            listing,
            segment,
        })
    }
}

#[derive(Serialize)]
pub struct MatchInfo {
    doc: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    package: String,
}

pub fn match_list(listing: &Listing, hits: &DocIdSet) -> Vec<MatchInfo> {
    hits.doc_ids()
        .filter_map(|doc| {
            listing.describe(doc).map(|listed| MatchInfo {
                doc,
                path: listed.path.clone(),
                package: listed.document.package.clone(),
            })
        })
        .collect()
}
