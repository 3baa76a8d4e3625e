use thiserror::Error;

use crate::types::RecordId;

/// Errors that can occur while validating, merging or encoding tagged rows.
#[derive(Debug, Error)]
pub enum AspectError {
    /// A required field is absent or cannot be coerced to its semantic type.
    #[error("schema error at line {line}: {field} {reason}")]
    Schema {
        /// 1-based source line of the offending row.
        line: usize,
        /// Name of the field that failed validation.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A continuation fragment has no preceding row in its record to merge into.
    #[error(
        "malformed record {record_id}: row {position} has no label and no predecessor in the same record"
    )]
    MalformedRecord {
        /// Record the orphaned fragment belongs to.
        record_id: RecordId,
        /// 0-based position of the fragment in the input sequence.
        position: usize,
    },

    /// A string could not be parsed as a label or IOB tag.
    #[error("invalid label: {0:?}")]
    InvalidLabel(String),
}

/// Result type alias for aspectra core operations.
pub type Result<T> = std::result::Result<T, AspectError>;
