//! Label frequency counts, the tabular form of a label distribution plot.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use aspectra_core::{AspectLabel, MergedToken, TaggedToken};

/// How often one label occurs. `label == None` counts missing labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: Option<AspectLabel>,
    pub count: usize,
}

impl fmt::Display for LabelCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label}\t{}", self.count),
            None => write!(f, "<missing>\t{}", self.count),
        }
    }
}

/// Count labels, most frequent first; ties are ordered by label.
pub fn label_distribution<'a, I>(labels: I) -> Vec<LabelCount>
where
    I: IntoIterator<Item = Option<&'a AspectLabel>>,
{
    let mut counts: HashMap<Option<&AspectLabel>, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut distribution: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.cloned(),
            count,
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

    distribution
}

/// Distribution of raw tags, including the missing marker.
pub fn tagged_distribution(rows: &[TaggedToken]) -> Vec<LabelCount> {
    label_distribution(rows.iter().map(|row| row.label.as_ref()))
}

/// Distribution of aspect names after merging.
pub fn merged_distribution(rows: &[MergedToken]) -> Vec<LabelCount> {
    label_distribution(rows.iter().map(|row| Some(&row.aspect_name)))
}
