//! # Fragment Merging
//!
//! Rejoins multi-word aspect values that the tokenizer split across rows.
//! Only the first row of such a value carries a label; the rows after it
//! have none and are appended to it, separated by a single space.

use tracing::debug;

use crate::error::{AspectError, Result};
use crate::types::{MergedToken, TaggedToken};

/// Merge unlabeled continuation rows into their predecessor.
///
/// The output has one row per labeled input row, in input order. A fragment
/// whose predecessor belongs to another record (or that has no predecessor at
/// all) fails with [`AspectError::MalformedRecord`].
///
/// # Examples
/// ```
/// use aspectra_core::pipeline::merge_fragments;
/// use aspectra_core::types::TaggedToken;
///
/// let rows = vec![
///     TaggedToken::new(1, "Apple", "Brand"),
///     TaggedToken::fragment(1, "Inc"),
/// ];
/// let merged = merge_fragments(&rows).unwrap();
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].aspect_value, "Apple Inc");
/// ```
pub fn merge_fragments(rows: &[TaggedToken]) -> Result<Vec<MergedToken>> {
    let mut merged = Vec::with_capacity(rows.len());
    let mut pending: Option<MergedToken> = None;
    let mut fragments = 0usize;

    for (position, row) in rows.iter().enumerate() {
        match &row.label {
            Some(label) => {
                merged.extend(pending.replace(MergedToken {
                    record_id: row.record_id,
                    aspect_value: row.token.clone(),
                    aspect_name: label.clone(),
                }));
            }
            None => match pending.as_mut() {
                Some(head) if head.record_id == row.record_id => {
                    head.aspect_value.push(' ');
                    head.aspect_value.push_str(&row.token);
                    fragments += 1;
                }
                _ => {
                    return Err(AspectError::MalformedRecord {
                        record_id: row.record_id,
                        position,
                    });
                }
            },
        }
    }
    merged.extend(pending);

    debug!(
        rows_in = rows.len(),
        rows_out = merged.len(),
        fragments,
        "merged token fragments"
    );

    Ok(merged)
}
