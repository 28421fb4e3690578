//! Usages and package-usages command implementation

use anyhow::Result;
use serde::Serialize;

use super::{IndexArgs, MatchInfo, SearchArgs, match_list};

#[derive(Serialize)]
struct UsagesSummary {
    target: String,
    kinds: Vec<&'static str>,
    operator: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    matches: Vec<MatchInfo>,
}

pub fn run(index: IndexArgs, search: SearchArgs, name: String) -> Result<()> {
    search_usages(index, search, name, false)
}

pub fn run_package(index: IndexArgs, search: SearchArgs, package: String) -> Result<()> {
    search_usages(index, search, package, true)
}

fn search_usages(
    index: IndexArgs,
    search: SearchArgs,
    target: String,
    package: bool,
) -> Result<()> {
    let open = index.open()?;
    let session = &open.session;
    let mask = search.mask()?;
    let operator = search.operator()?;

    let query = if package {
        session.package_usages_query(&target, mask, operator)?
    } else {
        session.usages_query(&target, mask, operator)?
    };

    let scoped = match search.package_scope() {
        Some(package_scope) => session.scope_filter(query, &[&package_scope]),
        None => session.scope_filter(query, &[&search.base_scope()]),
    };
    let matches = match &scoped {
        Some(query) => {
            let hits = symref_index_core::execute(&open.segment, query)?;
            tracing::info!("{} documents match {query}", hits.count());
            match_list(&open.listing, &hits)
        }
        None => {
            tracing::info!("Search scope is empty, nothing to search");
            Vec::new()
        }
    };

    let summary = UsagesSummary {
        target,
        kinds: mask.types().map(|usage| usage.name()).collect(),
        operator: operator.name(),
        query: scoped.map(|query| query.to_string()),
        matches,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
