//! Inspect command implementation

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;
use symref_index_core::IndexSegment;
use symref_usages::{ReferencesTermEncoder, UsageType};

use super::IndexArgs;

#[derive(Serialize)]
struct InspectSummary {
    document_count: u32,
    term_count: usize,
    fields: BTreeMap<String, FieldInfo>,
    /// Number of references per usage kind over all documents.
    usages: BTreeMap<&'static str, usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    terms: Vec<TermInfo>,
}

#[derive(Serialize, Default)]
struct FieldInfo {
    term_count: usize,
    posting_count: usize,
}

#[derive(Serialize)]
struct TermInfo {
    field: String,
    text: String,
    doc_freq: usize,
}

pub fn run(index: IndexArgs, verbose: u8) -> Result<()> {
    let open = index.open()?;
    let fields = &open.session.options().fields;
    let decoder = ReferencesTermEncoder::new(fields.references.as_str());

    let mut summary = InspectSummary {
        document_count: open.segment.max_doc(),
        term_count: open.segment.term_count(),
        fields: BTreeMap::new(),
        usages: UsageType::ALL.iter().map(|usage| (usage.name(), 0)).collect(),
        terms: Vec::new(),
    };

    for (term, doc_freq) in open.segment.term_stats() {
        let field = summary.fields.entry(term.field().to_string()).or_default();
        field.term_count += 1;
        field.posting_count += doc_freq;

        if term.field() == fields.references
            && let Some((_, mask)) = decoder.decode(term.text())
        {
            for usage in mask.types() {
                *summary.usages.entry(usage.name()).or_default() += doc_freq;
            }
        }

        if verbose > 0 {
            summary.terms.push(TermInfo {
                field: term.field().to_string(),
                text: term.text().to_string(),
                doc_freq,
            });
        }
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
