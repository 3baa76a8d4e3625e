//! # Unified Pipeline Interface
//!
//! Composes fragment merging and IOB encoding behind one configurable entry
//! point.

use tracing::debug;

use crate::error::Result;
use crate::types::{AspectLabel, MergedToken, TaggedToken, OUTSIDE_MARKER};

use super::encoder::encode_iob_rows;
use super::group::{group_by_key, GroupOrder};
use super::iob_tags::IobTag;
use super::merge::merge_fragments;

/// Configuration for the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Order in which records are emitted by the encoder
    pub group_order: GroupOrder,
    /// Label literal that marks tokens outside any aspect
    pub outside_marker: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            group_order: GroupOrder::FirstAppearance,
            outside_marker: OUTSIDE_MARKER.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a new pipeline configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record emission order.
    pub fn with_group_order(mut self, order: GroupOrder) -> Self {
        self.group_order = order;
        self
    }

    /// Set the label literal treated as "outside".
    ///
    /// Once overridden, a literal `"O"` in the data is an ordinary aspect name.
    pub fn with_outside_marker(mut self, marker: impl Into<String>) -> Self {
        self.outside_marker = marker.into();
        self
    }
}

/// Merged rows and their IOB tags, aligned 1:1 in emitted order.
///
/// Rows of a record are always contiguous here, even when they were not in
/// the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    pub rows: Vec<MergedToken>,
    pub tags: Vec<IobTag>,
}

impl PipelineOutput {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over `(row, tag)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&MergedToken, &IobTag)> {
        self.rows.iter().zip(&self.tags)
    }

    /// Tags rendered as label strings.
    pub fn labels(&self) -> Vec<String> {
        self.tags.iter().map(ToString::to_string).collect()
    }

    fn append(&mut self, other: PipelineOutput) {
        self.rows.extend(other.rows);
        self.tags.extend(other.tags);
    }
}

/// Fragment merging followed by IOB encoding.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline over a whole table.
    ///
    /// # Examples
    /// ```
    /// use aspectra_core::pipeline::Pipeline;
    /// use aspectra_core::types::TaggedToken;
    ///
    /// let rows = vec![
    ///     TaggedToken::new(1, "Apple", "Brand"),
    ///     TaggedToken::fragment(1, "Inc"),
    ///     TaggedToken::new(1, "Laptop", "O"),
    /// ];
    /// let output = Pipeline::default().run(&rows).unwrap();
    /// assert_eq!(output.rows[0].aspect_value, "Apple Inc");
    /// assert_eq!(output.labels(), vec!["B-Brand", "O"]);
    /// ```
    pub fn run(&self, rows: &[TaggedToken]) -> Result<PipelineOutput> {
        let merged = self.merge(rows)?;
        let output = self.encode(&merged);

        debug!(rows_in = rows.len(), rows_out = output.len(), "pipeline run complete");

        Ok(output)
    }

    /// Run the pipeline independently per record and reassemble the results.
    ///
    /// A record's rows are gathered before merging, so a fragment is always
    /// merged inside its own record. Records are emitted in the configured
    /// group order.
    pub fn process_records(&self, rows: &[TaggedToken]) -> Result<PipelineOutput> {
        let groups = group_by_key(rows, self.config.group_order, |row| row.record_id);
        let mut output = PipelineOutput::default();

        for group in &groups {
            let record: Vec<TaggedToken> =
                group.indices.iter().map(|&idx| rows[idx].clone()).collect();
            output.append(self.run(&record)?);
        }

        debug!(records = groups.len(), rows_out = output.len(), "processed records");

        Ok(output)
    }

    /// Get the pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn merge(&self, rows: &[TaggedToken]) -> Result<Vec<MergedToken>> {
        if self.config.outside_marker == OUTSIDE_MARKER {
            return merge_fragments(rows);
        }
        let normalized: Vec<TaggedToken> = rows
            .iter()
            .map(|row| TaggedToken {
                label: row.label.as_ref().map(|label| self.normalize(label)),
                ..row.clone()
            })
            .collect();
        merge_fragments(&normalized)
    }

    fn normalize(&self, label: &AspectLabel) -> AspectLabel {
        match label {
            AspectLabel::Aspect(name) if *name == self.config.outside_marker => {
                AspectLabel::Outside
            }
            AspectLabel::Outside => AspectLabel::Aspect(OUTSIDE_MARKER.to_string()),
            other => other.clone(),
        }
    }

    fn encode(&self, merged: &[MergedToken]) -> PipelineOutput {
        let (rows, tags) = encode_iob_rows(merged, self.config.group_order)
            .into_iter()
            .map(|(row, tag)| (row.clone(), tag))
            .unzip();
        PipelineOutput { rows, tags }
    }
}
