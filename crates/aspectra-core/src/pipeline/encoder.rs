//! # IOB Encoder
//!
//! Converts flat aspect labels into boundary-aware IOB tags, one record at a
//! time. A run of consecutive rows sharing an aspect becomes one span
//! (`B-` then `I-`); a label change or an `O` row closes it.
//!
//! Two distinct spans of the same aspect with nothing between them cannot be
//! told apart from one longer span and are encoded as a single span.

use crate::types::{AspectLabel, MergedToken};

use super::group::{group_by_record, GroupOrder};
use super::iob_tags::IobTag;

/// Encoder state between two tokens of the same record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpanState {
    #[default]
    Outside,
    Inside(String),
}

impl SpanState {
    /// Consume one label, returning the tag to emit.
    pub fn step(&mut self, label: &AspectLabel) -> IobTag {
        match label {
            AspectLabel::Outside => {
                *self = SpanState::Outside;
                IobTag::Outside
            }
            AspectLabel::Aspect(aspect) => {
                if matches!(self, SpanState::Inside(current) if *current == *aspect) {
                    IobTag::Inside(aspect.clone())
                } else {
                    *self = SpanState::Inside(aspect.clone());
                    IobTag::Begin(aspect.clone())
                }
            }
        }
    }
}

/// Encode the labels of a single record, in order.
pub fn encode_record<'a, I>(labels: I) -> Vec<IobTag>
where
    I: IntoIterator<Item = &'a AspectLabel>,
{
    let mut state = SpanState::default();
    labels.into_iter().map(|label| state.step(label)).collect()
}

/// Encode rows and pair each tag with its row, in emitted order.
///
/// Rows are grouped by record using `order`; within a record the input order
/// is kept. The state is reset at the start of every record.
pub fn encode_iob_rows(rows: &[MergedToken], order: GroupOrder) -> Vec<(&MergedToken, IobTag)> {
    let mut encoded = Vec::with_capacity(rows.len());

    for group in group_by_record(rows, order) {
        let mut state = SpanState::default();
        for idx in group.indices {
            let row = &rows[idx];
            encoded.push((row, state.step(&row.aspect_name)));
        }
    }

    encoded
}

/// Encode rows into IOB tags using the given group order.
pub fn encode_iob_tags(rows: &[MergedToken], order: GroupOrder) -> Vec<IobTag> {
    encode_iob_rows(rows, order)
        .into_iter()
        .map(|(_, tag)| tag)
        .collect()
}

/// Encode rows into IOB label strings, records in first-appearance order.
///
/// # Examples
/// ```
/// use aspectra_core::pipeline::encode_iob;
/// use aspectra_core::types::MergedToken;
///
/// let rows = vec![
///     MergedToken::new(1, "Apple", "Brand"),
///     MergedToken::new(1, "iPhone", "Brand"),
///     MergedToken::new(1, "Black", "Color"),
/// ];
/// assert_eq!(encode_iob(&rows), vec!["B-Brand", "I-Brand", "B-Color"]);
/// ```
pub fn encode_iob(rows: &[MergedToken]) -> Vec<String> {
    encode_iob_tags(rows, GroupOrder::FirstAppearance)
        .into_iter()
        .map(|tag| tag.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, labels: &[&str]) -> Vec<MergedToken> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| MergedToken::new(id, format!("w{i}"), label))
            .collect()
    }

    #[test]
    fn test_boundary_scenario() {
        let rows = record(1, &["O", "Brand", "Brand", "O", "Color"]);
        assert_eq!(
            encode_iob(&rows),
            vec!["O", "B-Brand", "I-Brand", "O", "B-Color"]
        );
    }

    #[test]
    fn test_group_reset() {
        let mut rows = record(1, &["Brand", "Brand"]);
        rows.extend(record(2, &["Brand"]));
        assert_eq!(encode_iob(&rows), vec!["B-Brand", "I-Brand", "B-Brand"]);
    }

    #[test]
    fn test_label_change_begins_new_span() {
        let rows = record(1, &["Brand", "Color", "Brand"]);
        assert_eq!(encode_iob(&rows), vec!["B-Brand", "B-Color", "B-Brand"]);
    }

    #[test]
    fn test_adjacent_same_aspect_spans_merge() {
        let rows = record(1, &["Color", "Color", "Color"]);
        assert_eq!(encode_iob(&rows), vec!["B-Color", "I-Color", "I-Color"]);
    }

    #[test]
    fn test_outside_resets_span() {
        let rows = record(1, &["Brand", "O", "Brand"]);
        assert_eq!(encode_iob(&rows), vec!["B-Brand", "O", "B-Brand"]);
    }

    #[test]
    fn test_aspect_named_like_inside_prefix() {
        // Aspect names are compared whole; no prefix stripping.
        let rows = record(1, &["I-Brand", "Brand"]);
        assert_eq!(encode_iob(&rows), vec!["B-I-Brand", "B-Brand"]);
    }

    #[test]
    fn test_alignment_and_determinism() {
        let mut rows = record(4, &["O", "Brand", "Brand"]);
        rows.extend(record(2, &["Color", "O"]));
        let first = encode_iob(&rows);
        assert_eq!(first.len(), rows.len());
        assert_eq!(first, encode_iob(&rows));
    }

    #[test]
    fn test_first_appearance_vs_ascending_key() {
        let mut rows = record(9, &["Brand"]);
        rows.extend(record(3, &["Color", "Color"]));

        let stable: Vec<String> = encode_iob_tags(&rows, GroupOrder::FirstAppearance)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(stable, vec!["B-Brand", "B-Color", "I-Color"]);

        let sorted: Vec<String> = encode_iob_tags(&rows, GroupOrder::AscendingKey)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(sorted, vec!["B-Color", "I-Color", "B-Brand"]);
    }

    #[test]
    fn test_non_contiguous_record_is_one_group() {
        let rows = vec![
            MergedToken::new(1, "Apple", "Brand"),
            MergedToken::new(2, "Red", "Color"),
            MergedToken::new(1, "Inc", "Brand"),
        ];
        let encoded = encode_iob_rows(&rows, GroupOrder::FirstAppearance);
        let values: Vec<&str> = encoded.iter().map(|(row, _)| row.aspect_value.as_str()).collect();
        assert_eq!(values, vec!["Apple", "Inc", "Red"]);
        let tags: Vec<String> = encoded.iter().map(|(_, tag)| tag.to_string()).collect();
        assert_eq!(tags, vec!["B-Brand", "I-Brand", "B-Color"]);
    }

    #[test]
    fn test_encode_record() {
        let labels = [AspectLabel::new("Brand"), AspectLabel::Outside];
        assert_eq!(
            encode_record(&labels),
            vec![IobTag::Begin("Brand".into()), IobTag::Outside]
        );
    }

    #[test]
    fn test_empty() {
        assert!(encode_iob(&[]).is_empty());
    }
}
