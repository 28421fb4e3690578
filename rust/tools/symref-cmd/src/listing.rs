//! JSON document listings the command-line tools index in memory.
//!
//! ```json
//! {
//!   "documents": [
//!     {
//!       "path": "src/com/acme/App.java",
//!       "package": "com.acme",
//!       "references": { "java.util.List": ["type-reference", "method-reference"] }
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use symref_index_core::{DocId, MemorySegment};
use symref_usages::{UsageDocument, UsagesSession};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    pub documents: Vec<ListedDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListedDocument {
    /// Source file the document was compiled from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(flatten)]
    pub document: UsageDocument,
}

impl Listing {
    pub fn load(path: &Path) -> Result<Listing> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read index listing {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse index listing {}", path.display()))
    }

    /// Indexes every document; the document id is the position in the listing.
    pub fn index(&self, session: &UsagesSession) -> Result<MemorySegment> {
        let mut builder = MemorySegment::builder();
        for listed in &self.documents {
            builder.add_document(session.document_terms(&listed.document))?;
        }
        Ok(builder.build())
    }

    pub fn describe(&self, doc: DocId) -> Option<&ListedDocument> {
        self.documents.get(doc as usize)
    }
}
