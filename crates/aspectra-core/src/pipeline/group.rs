//! # Record Grouping
//!
//! Partitions rows by record id. Rows of one record need not be contiguous;
//! they are collected into a single group and keep their original order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{MergedToken, RecordId};

/// Order in which record groups are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupOrder {
    /// Groups appear in the order their first row appears in the input.
    #[default]
    FirstAppearance,
    /// Groups are sorted by record id.
    AscendingKey,
}

/// The rows belonging to one record, as indices into the grouped slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordGroup {
    pub record_id: RecordId,
    pub indices: Vec<usize>,
}

impl RecordGroup {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Group arbitrary rows by the record id returned by `key`.
pub fn group_by_key<T, F>(rows: &[T], order: GroupOrder, key: F) -> Vec<RecordGroup>
where
    F: Fn(&T) -> RecordId,
{
    let mut groups: Vec<RecordGroup> = Vec::new();
    let mut slots: HashMap<RecordId, usize> = HashMap::new();

    for (idx, row) in rows.iter().enumerate() {
        let record_id = key(row);
        let slot = *slots.entry(record_id).or_insert_with(|| {
            groups.push(RecordGroup {
                record_id,
                indices: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].indices.push(idx);
    }

    if order == GroupOrder::AscendingKey {
        // Keys are unique, so an unstable sort is deterministic here.
        groups.sort_unstable_by_key(|group| group.record_id);
    }

    groups
}

/// Group merged tokens by record.
pub fn group_by_record(rows: &[MergedToken], order: GroupOrder) -> Vec<RecordGroup> {
    group_by_key(rows, order, |row| row.record_id)
}
