//! Preparation of loaded rows for the pipeline.

use tracing::{debug, warn};

use aspectra_core::schema::coerce_record_id;
use aspectra_core::{RawTaggedRow, TaggedToken};

use crate::error::Result;

/// Validated rows, sorted by record id, plus how many rows were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedTable {
    pub rows: Vec<TaggedToken>,
    pub dropped: usize,
}

/// Drop rows without a numeric record id, validate the rest and sort by record.
///
/// The sort is stable, so tokens keep their order inside each record. Any
/// other schema violation (such as a missing token) is an error.
pub fn prepare_rows(raw: Vec<RawTaggedRow>) -> Result<PreparedTable> {
    let total = raw.len();
    let mut rows = Vec::with_capacity(total);

    for row in raw {
        let coercible = row.record_id.as_deref().and_then(coerce_record_id).is_some();
        if !coercible {
            debug!(line = row.line, record_id = ?row.record_id, "dropping row without numeric record id");
            continue;
        }
        rows.push(TaggedToken::try_from(row)?);
    }

    let dropped = total - rows.len();
    if dropped > 0 {
        warn!(dropped, "dropped rows without a numeric record id");
    }

    rows.sort_by_key(|row| row.record_id);

    Ok(PreparedTable { rows, dropped })
}
