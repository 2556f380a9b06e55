use crate::types::TelemetryRecord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters accumulated during one extraction pass
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtractionStats {
    pub lines_scanned: usize,
    pub timecodes_matched: usize,
    pub records_extracted: usize,
    pub skipped_no_gps: usize,
    pub deduplicated: usize,
}

/// Complete extraction result for one telemetry file
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TelemetryLog {
    pub video_name: String,
    pub records: Vec<TelemetryRecord>,
    pub stats: ExtractionStats,
}

impl TelemetryLog {
    pub fn new(video_name: String) -> Self {
        Self {
            video_name,
            records: Vec::new(),
            stats: ExtractionStats::default(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Check if any GPS-bearing records were extracted
    pub fn has_gps_data(&self) -> bool {
        !self.records.is_empty()
    }

    /// Get the time span covered by the records in milliseconds
    pub fn duration_ms(&self) -> u64 {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => last.timestamp_ms.saturating_sub(first.timestamp_ms),
            _ => 0,
        }
    }
}
