use serde::{Deserialize, Serialize};

use super::label::AspectLabel;

/// Identifier of a record (one listing title).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row as delivered by the loading layer, before validation.
///
/// Every field is optional because the source table may leave any cell empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTaggedRow {
    /// 1-based line in the source file (header is line 1).
    pub line: usize,
    pub record_id: Option<String>,
    pub title: Option<String>,
    pub token: Option<String>,
    pub tag: Option<String>,
}

/// One validated input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub record_id: RecordId,
    pub token: String,
    /// `None` marks a continuation fragment of the preceding token.
    pub label: Option<AspectLabel>,
}

impl TaggedToken {
    pub fn new(record_id: impl Into<RecordId>, token: impl Into<String>, label: &str) -> Self {
        Self {
            record_id: record_id.into(),
            token: token.into(),
            label: Some(AspectLabel::new(label)),
        }
    }

    /// A row whose label is missing.
    pub fn fragment(record_id: impl Into<RecordId>, token: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            token: token.into(),
            label: None,
        }
    }

    /// Returns `true` if this row continues the previous token.
    #[must_use]
    pub fn is_fragment(&self) -> bool {
        self.label.is_none()
    }
}

/// One output row of fragment merging: a full aspect value and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedToken {
    pub record_id: RecordId,
    pub aspect_value: String,
    pub aspect_name: AspectLabel,
}

impl MergedToken {
    pub fn new(
        record_id: impl Into<RecordId>,
        aspect_value: impl Into<String>,
        aspect_name: &str,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            aspect_value: aspect_value.into(),
            aspect_name: AspectLabel::new(aspect_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_constructor() {
        let row = TaggedToken::fragment(3, "Inc");
        assert!(row.is_fragment());
        assert_eq!(row.record_id, RecordId::new(3));

        let row = TaggedToken::new(3, "Apple", "Brand");
        assert!(!row.is_fragment());
    }

    #[test]
    fn test_record_id_serializes_transparently() {
        let json = serde_json::to_string(&RecordId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_merged_token_json_shape() {
        let row = MergedToken::new(1, "Apple Inc", "Brand");
        let value: serde_json::Value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["record_id"], 1);
        assert_eq!(value["aspect_value"], "Apple Inc");
        assert_eq!(value["aspect_name"], "Brand");
    }
}
