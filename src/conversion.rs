//! Timestamp conversion utilities
//!
//! Renders millisecond offsets as zero-padded `HH:MM:SS<sep>mmm` strings for
//! the TIME export column, and maps offsets to whole-minute buckets for the
//! per-minute retention policy.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator between seconds and milliseconds in the TIME column.
///
/// Both forms occur in the wild; `Colon` is the documented default, keeping
/// the rendered cell free of the CSV delimiter. Nothing downstream parses
/// the string back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimestampSeparator {
    Comma,
    #[default]
    Colon,
}

impl TimestampSeparator {
    pub fn as_char(self) -> char {
        match self {
            TimestampSeparator::Comma => ',',
            TimestampSeparator::Colon => ':',
        }
    }
}

/// Format a millisecond offset as `HH:MM:SS<sep>mmm`
pub fn format_timestamp(ms: u64, separator: TimestampSeparator) -> String {
    let total_seconds = ms / 1000;
    let milliseconds = ms % 1000;
    let seconds = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;
    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours,
        minutes,
        seconds,
        separator.as_char(),
        milliseconds
    )
}

/// Whole-minute bucket for a millisecond offset
pub fn minute_bucket(ms: u64) -> u64 {
    ms / 60_000
}
