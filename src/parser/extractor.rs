//! Telemetry extraction from SRT caption streams
//!
//! Scans the subtitle text line by line. Each matched timecode opens a
//! fixed-size trailing window of caption lines that is searched for GPS and
//! auxiliary fields; a record is emitted only when both coordinates parse.
//! The cursor always advances by a single line, so overlapping windows are
//! expected and harmless.

use crate::conversion::{format_timestamp, TimestampSeparator};
use crate::error::{Result, SrtError};
use crate::filters::{retain_first_per_minute, DedupMode};
use crate::parser::patterns::{extract_float, extract_string, extract_u32, TelemetryPatterns};
use crate::types::{TelemetryLog, TelemetryRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// Default trailing window, in lines, searched after a matched timecode.
/// DJI caption blocks fit comfortably; 8 is the other observed layout.
pub const DEFAULT_BLOCK_SIZE: usize = 12;

/// Configuration for [`TelemetryExtractor`]
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Number of lines (matching line included) searched per timecode
    pub block_size: usize,
    /// Retention policy applied after the scan
    pub dedup: DedupMode,
    /// Separator used when rendering the TIME column
    pub separator: TimestampSeparator,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            dedup: DedupMode::PerFrame,
            separator: TimestampSeparator::Colon,
        }
    }
}

/// Stateless telemetry extractor holding its compiled patterns as immutable
/// configuration.
#[derive(Debug)]
pub struct TelemetryExtractor {
    patterns: TelemetryPatterns,
    config: ExtractorConfig,
}

impl TelemetryExtractor {
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            patterns: TelemetryPatterns::compile(),
            config,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract telemetry from the file at (or derived from) `input_path`.
    ///
    /// Video paths are resolved to their sibling telemetry file first, see
    /// [`resolve_telemetry_path`]. Fails with [`SrtError::NotFound`] when the
    /// telemetry file is absent, [`SrtError::Io`] when it cannot be read and
    /// [`SrtError::Encoding`] when its bytes are not valid UTF-8.
    pub fn extract_file(&self, input_path: &Path) -> Result<TelemetryLog> {
        let srt_path = resolve_telemetry_path(input_path)?;
        let bytes = fs::read(&srt_path)?;
        let content = String::from_utf8(bytes)?;

        let video_name = srt_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");

        Ok(self.extract_str(&content, video_name))
    }

    /// Extract telemetry records from raw subtitle text.
    ///
    /// An input with no timecodes or no GPS-bearing blocks yields an empty
    /// log; that is not an error.
    pub fn extract_str(&self, content: &str, video_name: &str) -> TelemetryLog {
        let lines: Vec<&str> = content.lines().collect();
        let mut log = TelemetryLog::new(video_name.to_string());
        log.stats.lines_scanned = lines.len();

        let mut cursor = 0;
        while cursor < lines.len() {
            let caps = match self.patterns.timecode.captures(lines[cursor]) {
                Some(caps) => caps,
                None => {
                    cursor += 1;
                    continue;
                }
            };

            log.stats.timecodes_matched += 1;

            let hours: u64 = caps[1].parse().unwrap_or(0);
            let minutes: u64 = caps[2].parse().unwrap_or(0);
            let seconds: u64 = caps[3].parse().unwrap_or(0);
            let millis: u64 = caps[4].parse().unwrap_or(0);
            let timestamp_ms = ((hours * 60 + minutes) * 60 + seconds) * 1000 + millis;

            // The window tolerates running past end-of-input: truncate, never error
            let window_end = (cursor + self.config.block_size).min(lines.len());
            let block = lines[cursor..window_end].join("\n");

            let latitude = extract_float(&self.patterns.latitude, &block);
            let longitude = extract_float(&self.patterns.longitude, &block);

            // Latitude and longitude are all-or-nothing; without both the
            // timecode occurrence is discarded entirely
            let (latitude, longitude) = match (latitude, longitude) {
                (Some(lat), Some(lon)) => (lat, lon),
                _ => {
                    log.stats.skipped_no_gps += 1;
                    cursor += 1;
                    continue;
                }
            };

            let date = extract_string(&self.patterns.datetime, &block).map(|stamp| {
                match stamp.split_whitespace().next() {
                    Some(date_part) => date_part.to_string(),
                    None => stamp,
                }
            });

            log.records.push(TelemetryRecord {
                frame_index: extract_u32(&self.patterns.frame_count, &block).unwrap_or(0),
                video_name: video_name.to_string(),
                timestamp_ms,
                time: format_timestamp(timestamp_ms, self.config.separator),
                date,
                latitude,
                longitude,
                rel_altitude: extract_float(&self.patterns.rel_altitude, &block),
                abs_altitude: extract_float(&self.patterns.abs_altitude, &block),
                comments: String::new(),
            });

            cursor += 1;
        }

        if self.config.dedup == DedupMode::PerMinute {
            log.stats.deduplicated = retain_first_per_minute(&mut log.records);
        }
        log.stats.records_extracted = log.records.len();

        log
    }
}

impl Default for TelemetryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the telemetry file path from a video or telemetry input path.
///
/// A path already carrying an `.srt` extension (case-insensitive) is used as
/// is. Any other extension is replaced, probing the `.SRT` and `.srt`
/// sibling variants in that order.
pub fn resolve_telemetry_path(input_path: &Path) -> Result<PathBuf> {
    let extension = input_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let extension = match extension {
        Some(ext) => ext,
        None => {
            return Err(SrtError::InvalidInput(format!(
                "cannot derive telemetry path, no file extension: {}",
                input_path.display()
            )))
        }
    };

    if extension == "srt" {
        if input_path.exists() {
            return Ok(input_path.to_path_buf());
        }
        return Err(SrtError::NotFound(input_path.to_path_buf()));
    }

    for candidate_ext in ["SRT", "srt"] {
        let candidate = input_path.with_extension(candidate_ext);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(SrtError::NotFound(input_path.with_extension("SRT")))
}
