use std::fmt;

use symref_common::Result;
use symref_doc_set::DocIdSet;

use crate::segment::IndexSegment;

/// Restricts which documents of a segment a query is allowed to match.
///
/// A filter does not combine with the wrapped query's own matches; the executor
/// intersects the two. Implementations are evaluated once per segment and must
/// return a set whose span equals [`IndexSegment::max_doc`].
pub trait DocumentFilter: fmt::Debug + Send + Sync {
    fn doc_id_set(&self, segment: &dyn IndexSegment) -> Result<DocIdSet>;
}
