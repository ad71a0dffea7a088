//! Counting primitives shared by the analyzers.

use crate::core::TagCount;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Frequency table keyed by tag or label name.
///
/// Counts only ever increase during a pass; `most_common` imposes a
/// deterministic order (count descending, then key ascending) on output.
#[derive(Debug, Clone, Default)]
pub struct CountTable {
    counts: HashMap<String, u64>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        *self.counts.entry(key.to_string()).or_insert(0) += 1;
    }

    pub fn add(&mut self, key: &str, amount: u64) {
        *self.counts.entry(key.to_string()).or_insert(0) += amount;
    }

    /// Fold another table into this one (used for cross-split totals).
    pub fn merge(&mut self, other: &CountTable) {
        for (key, count) in &other.counts {
            *self.counts.entry(key.clone()).or_insert(0) += count;
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Entries sorted by count descending, key ascending on ties.
    pub fn most_common(&self) -> Vec<TagCount> {
        let mut entries: Vec<TagCount> = self
            .counts
            .iter()
            .map(|(name, count)| TagCount {
                name: name.clone(),
                count: *count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        entries
    }
}

/// Min/mean/max over a list of word counts. Empty input yields all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthStats {
    pub min: u64,
    pub mean: f64,
    pub max: u64,
}

impl Default for LengthStats {
    fn default() -> Self {
        Self {
            min: 0,
            mean: 0.0,
            max: 0,
        }
    }
}

pub fn length_stats(lengths: &[u64]) -> LengthStats {
    if lengths.is_empty() {
        return LengthStats::default();
    }
    let sum: u64 = lengths.iter().sum();
    LengthStats {
        min: *lengths.iter().min().expect("non-empty"),
        mean: sum as f64 / lengths.len() as f64,
        max: *lengths.iter().max().expect("non-empty"),
    }
}

/// Class balance verdict for a label distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImbalanceCheck {
    /// max(label count) / min(label count); infinite when some label
    /// never occurs in a split that introduced it elsewhere
    pub ratio: f64,
    pub threshold: f64,
    pub imbalanced: bool,
}

/// Ratio of the most to the least frequent entry. `None` for an empty table.
pub fn imbalance_ratio(table: &CountTable) -> Option<f64> {
    let entries = table.most_common();
    let max = entries.first()?.count;
    let min = entries.last()?.count;
    if min == 0 {
        return Some(f64::INFINITY);
    }
    Some(max as f64 / min as f64)
}

pub fn check_imbalance(table: &CountTable, threshold: f64) -> Option<ImbalanceCheck> {
    let ratio = imbalance_ratio(table)?;
    Some(ImbalanceCheck {
        ratio,
        threshold,
        imbalanced: ratio > threshold,
    })
}

/// Percentage of `count` against `total`, zero-guarded.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
