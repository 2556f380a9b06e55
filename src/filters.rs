//! Record retention policies
//!
//! The dense per-frame output keeps every GPS-bearing record. The per-minute
//! variant keeps only the first record of each whole-minute bucket, serving
//! the sparse downstream column set.

use crate::types::TelemetryRecord;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Deduplication policy applied after extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DedupMode {
    /// Keep every successfully parsed record (primary behavior)
    #[default]
    PerFrame,
    /// Keep only the first record within each whole-minute bucket
    PerMinute,
}

/// Retain the first record of each whole-minute bucket, preserving order.
///
/// Returns the number of records dropped.
pub fn retain_first_per_minute(records: &mut Vec<TelemetryRecord>) -> usize {
    let before = records.len();
    let mut seen = HashSet::new();
    records.retain(|record| seen.insert(record.minute_bucket()));
    before - records.len()
}
