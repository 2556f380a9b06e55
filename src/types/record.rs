#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One GPS-tagged telemetry sample extracted from a caption block.
///
/// A record is only materialized when both latitude and longitude parsed
/// successfully, so the pair is always present together. Every other field
/// tolerates absence independently.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TelemetryRecord {
    /// Frame counter from the caption block (`FrameCnt:`), 0 when absent
    pub frame_index: u32,
    /// Filename stem of the source file (no extension, no directory)
    pub video_name: String,
    /// Millisecond offset from stream start
    pub timestamp_ms: u64,
    /// Formatted `HH:MM:SS<sep>mmm` rendering of `timestamp_ms`
    pub time: String,
    /// Calendar date (`YYYY-MM-DD`) when the block carried a datetime stamp
    pub date: Option<String>,
    /// Decimal degrees
    pub latitude: f64,
    /// Decimal degrees
    pub longitude: f64,
    /// Altitude relative to the takeoff point, meters
    pub rel_altitude: Option<f64>,
    /// Absolute altitude, meters
    pub abs_altitude: Option<f64>,
    /// Free-text annotation, default empty
    pub comments: String,
}

impl TelemetryRecord {
    /// Altitude projected into the ALTITUDE export column: absolute when
    /// captured, relative otherwise.
    pub fn export_altitude(&self) -> Option<f64> {
        self.abs_altitude.or(self.rel_altitude)
    }

    /// Whole-minute bucket this record falls into
    pub fn minute_bucket(&self) -> u64 {
        self.timestamp_ms / 60_000
    }
}
