pub mod label;
pub mod record;

pub use label::{AspectLabel, OUTSIDE_MARKER};
pub use record::{MergedToken, RawTaggedRow, RecordId, TaggedToken};
