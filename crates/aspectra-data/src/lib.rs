//! # Aspectra Data
//!
//! The table layer around the core pipeline: reading tagged title tables
//! (gzip-compressed TSV), preparing their rows, counting label frequencies and
//! writing IOB-encoded output.

pub mod distribution;
pub mod error;
pub mod export;
pub mod loader;
pub mod prepare;

pub use distribution::{label_distribution, merged_distribution, tagged_distribution, LabelCount};
pub use error::{DataError, Result};
pub use export::{sentences, write_jsonl, write_tsv, TaggedSentence};
pub use loader::{
    load_listing_titles, load_tagged_titles, open_table, read_listing_titles, read_tagged_titles,
    ListingTitle,
};
pub use prepare::{prepare_rows, PreparedTable};
