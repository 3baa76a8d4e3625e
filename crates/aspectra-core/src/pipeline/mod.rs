pub mod encoder;
pub mod group;
pub mod iob_tags;
pub mod merge;
pub mod unified;

pub use encoder::{encode_iob, encode_iob_rows, encode_iob_tags, encode_record, SpanState};
pub use group::{group_by_key, group_by_record, GroupOrder, RecordGroup};
pub use iob_tags::{extract_spans, IobTag, Span};
pub use merge::merge_fragments;
pub use unified::{Pipeline, PipelineConfig, PipelineOutput};
