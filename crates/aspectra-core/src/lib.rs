//! # Aspectra Core
//!
//! Reconciles aspect-tagged listing titles and encodes them for sequence
//! labeling. Tokens that the tokenizer split off a multi-word aspect value
//! are merged back, then per-token aspect labels are converted to the IOB
//! scheme record by record.
//!
//! ## Quick Start
//!
//! ```rust
//! use aspectra_core::pipeline::Pipeline;
//! use aspectra_core::types::TaggedToken;
//!
//! let rows = vec![
//!     TaggedToken::new(1, "Apple", "Brand"),
//!     TaggedToken::fragment(1, "Inc"),
//!     TaggedToken::new(1, "MacBook", "Brand"),
//!     TaggedToken::new(1, "refurbished", "O"),
//! ];
//! let output = Pipeline::default().run(&rows).unwrap();
//!
//! assert_eq!(output.rows[0].aspect_value, "Apple Inc");
//! assert_eq!(output.labels(), vec!["B-Brand", "I-Brand", "O"]);
//! ```
pub mod error;
pub mod pipeline;
pub mod schema;
pub mod types;

// Re-export primary API
pub use error::{AspectError, Result};
pub use pipeline::{
    encode_iob, encode_iob_tags, extract_spans, merge_fragments, GroupOrder, IobTag, Pipeline,
    PipelineConfig, PipelineOutput, Span,
};
pub use schema::validate_rows;
pub use types::{AspectLabel, MergedToken, RawTaggedRow, RecordId, TaggedToken};
