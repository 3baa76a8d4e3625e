//! End-to-end behaviour of merging followed by IOB encoding.

use aspectra_core::pipeline::{extract_spans, GroupOrder, Pipeline, PipelineConfig};
use aspectra_core::schema::validate_rows;
use aspectra_core::{encode_iob, merge_fragments, AspectError, MergedToken, RawTaggedRow, TaggedToken};

fn raw(line: usize, id: &str, token: &str, tag: &str) -> RawTaggedRow {
    RawTaggedRow {
        line,
        record_id: Some(id.to_string()),
        title: None,
        token: Some(token.to_string()),
        tag: (!tag.is_empty()).then(|| tag.to_string()),
    }
}

fn listing() -> Vec<RawTaggedRow> {
    vec![
        raw(2, "1", "Supreme", "Brand"),
        raw(3, "1", "Nike", "Brand"),
        raw(4, "1", "Air", "Product Line"),
        raw(5, "1", "Force", ""),
        raw(6, "1", "1", ""),
        raw(7, "1", "Low", "Style"),
        raw(8, "1", "Weiß", "Color"),
        raw(9, "1", "Gr.", "O"),
        raw(10, "1", "42", "Size"),
        raw(11, "2", "Adidas", "Brand"),
        raw(12, "2", "Sneaker", "Type"),
        raw(13, "2", "Schwarz", "Color"),
        raw(14, "2", "Weiß", "Color"),
    ]
}

#[test]
fn full_listing_is_merged_and_encoded() {
    let rows = validate_rows(listing()).unwrap();
    let output = Pipeline::default().run(&rows).unwrap();

    let values: Vec<&str> = output.rows.iter().map(|r| r.aspect_value.as_str()).collect();
    assert_eq!(
        values,
        vec![
            "Supreme", "Nike", "Air Force 1", "Low", "Weiß", "Gr.", "42", "Adidas", "Sneaker",
            "Schwarz", "Weiß",
        ]
    );
    assert_eq!(
        output.labels(),
        vec![
            "B-Brand",
            "I-Brand",
            "B-Product Line",
            "B-Style",
            "B-Color",
            "O",
            "B-Size",
            "B-Brand",
            "B-Type",
            "B-Color",
            "I-Color",
        ]
    );
}

#[test]
fn spans_round_trip_through_encoding() {
    let rows = validate_rows(listing()).unwrap();
    let output = Pipeline::default().run(&rows).unwrap();
    let record_two: Vec<_> = output
        .iter()
        .filter(|(row, _)| row.record_id.get() == 2)
        .map(|(_, tag)| tag.clone())
        .collect();

    let spans = extract_spans(&record_two);
    let aspects: Vec<&str> = spans.iter().map(|s| s.aspect.as_str()).collect();
    assert_eq!(aspects, vec!["Brand", "Type", "Color"]);
    assert_eq!(spans[2].len(), 2);
}

#[test]
fn merge_count_law_holds() {
    let rows = validate_rows(listing()).unwrap();
    let labeled = rows.iter().filter(|r| r.label.is_some()).count();
    assert_eq!(merge_fragments(&rows).unwrap().len(), labeled);
}

#[test]
fn encoding_is_aligned_with_merged_rows() {
    let rows = validate_rows(listing()).unwrap();
    let merged = merge_fragments(&rows).unwrap();
    assert_eq!(encode_iob(&merged).len(), merged.len());
}

#[test]
fn record_starting_with_fragment_is_rejected() {
    let mut rows = listing();
    rows.push(raw(15, "3", "orphan", ""));
    rows.push(raw(16, "3", "Puma", "Brand"));
    let rows = validate_rows(rows).unwrap();

    let err = Pipeline::default().run(&rows).unwrap_err();
    match err {
        AspectError::MalformedRecord { record_id, position } => {
            assert_eq!(record_id.get(), 3);
            assert_eq!(position, 13);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn group_state_resets_between_records() {
    let rows = vec![
        TaggedToken::new(10, "Levi's", "Brand"),
        TaggedToken::new(10, "Strauss", "Brand"),
        TaggedToken::new(11, "Wrangler", "Brand"),
    ];
    let output = Pipeline::default().run(&rows).unwrap();
    assert_eq!(output.labels(), vec!["B-Brand", "I-Brand", "B-Brand"]);
}

#[test]
fn ascending_key_order_sorts_records() {
    let rows = vec![
        MergedToken::new(5, "Gucci", "Brand"),
        MergedToken::new(1, "Rot", "Color"),
    ];
    let tags = aspectra_core::encode_iob_tags(&rows, GroupOrder::AscendingKey);
    assert_eq!(tags[0].to_string(), "B-Color");

    let pipeline = Pipeline::new(PipelineConfig::new().with_group_order(GroupOrder::AscendingKey));
    let output = pipeline
        .run(&[TaggedToken::new(5, "Gucci", "Brand"), TaggedToken::new(1, "Rot", "Color")])
        .unwrap();
    assert_eq!(output.rows[0].aspect_value, "Rot");
}

#[test]
fn output_serializes_to_json() {
    let rows = validate_rows(listing()).unwrap();
    let output = Pipeline::default().run(&rows).unwrap();
    let json = serde_json::to_string(&output.tags).unwrap();
    assert!(json.starts_with("[\"B-Brand\",\"I-Brand\""));
}
