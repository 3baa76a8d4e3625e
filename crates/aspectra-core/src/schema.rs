//! # Schema validation
//!
//! Converts untyped loader rows into [`TaggedToken`]s. This is the boundary
//! where [`AspectError::Schema`] is raised; nothing past it re-checks types.

use crate::error::{AspectError, Result};
use crate::types::{AspectLabel, RawTaggedRow, RecordId, TaggedToken};

/// Column holding the record identifier in the source table.
pub const RECORD_ID_FIELD: &str = "Record Number";
/// Column holding the token text.
pub const TOKEN_FIELD: &str = "Token";
/// Column holding the aspect tag.
pub const TAG_FIELD: &str = "Tag";

/// Coerce a raw cell into a record id.
///
/// Accepts integers and integral floats (`"12"`, `" 12 "`, `"12.0"`), the way a
/// numeric column coercion would. Returns `None` for anything else.
pub fn coerce_record_id(raw: &str) -> Option<RecordId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(id) = raw.parse::<i64>() {
        return Some(RecordId::new(id));
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(RecordId::new(value as i64))
    } else {
        None
    }
}

impl TryFrom<RawTaggedRow> for TaggedToken {
    type Error = AspectError;

    fn try_from(row: RawTaggedRow) -> Result<Self> {
        let line = row.line;
        let raw_id = row.record_id.ok_or(AspectError::Schema {
            line,
            field: RECORD_ID_FIELD,
            reason: "is missing".into(),
        })?;
        let record_id = coerce_record_id(&raw_id).ok_or_else(|| AspectError::Schema {
            line,
            field: RECORD_ID_FIELD,
            reason: format!("is not numeric: {raw_id:?}"),
        })?;
        let token = row.token.ok_or(AspectError::Schema {
            line,
            field: TOKEN_FIELD,
            reason: "is missing".into(),
        })?;
        // An empty tag cell is the continuation marker, not an error.
        let label = match row.tag.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(tag) => Some(AspectLabel::new(tag)),
        };

        Ok(TaggedToken {
            record_id,
            token,
            label,
        })
    }
}

/// Strictly convert a whole table. The first invalid row aborts.
pub fn validate_rows(rows: impl IntoIterator<Item = RawTaggedRow>) -> Result<Vec<TaggedToken>> {
    rows.into_iter().map(TaggedToken::try_from).collect()
}
