//! DJI SRT Telemetry Parser Library
//!
//! A Rust library for parsing DJI drone subtitle (SRT) telemetry files.
//! DJI drones burn per-frame telemetry into the caption stream of their
//! flight videos; this library scans those captions, extracts the
//! GPS-bearing samples and exports them as CSV.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV export functionality
//! - **`cli`** (default): Build the command-line interface binary
//! - **`json`**: Enable record export in JSON format
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Extract telemetry and access the records:
//! ```rust,no_run
//! use dji_srt_parser::TelemetryExtractor;
//! use std::path::Path;
//!
//! let extractor = TelemetryExtractor::new();
//! let log = extractor.extract_file(Path::new("DJI_0001.SRT")).unwrap();
//! println!("Extracted {} records", log.record_count());
//! println!("Flight span: {} ms", log.duration_ms());
//! ```
//!
//! Export to CSV format:
//! ```rust,no_run
//! use dji_srt_parser::{export_log, ExportOptions, TelemetryExtractor};
//! use std::path::Path;
//!
//! let extractor = TelemetryExtractor::new();
//! let input = Path::new("DJI_0001.SRT");
//! let log = extractor.extract_file(input).unwrap();
//!
//! let options = ExportOptions {
//!     csv: true,
//!     json: false,
//!     output_dir: None,
//! };
//! let report = export_log(&log, input, &options).unwrap();
//! if let Some(path) = report.csv_path {
//!     println!("Exported to: {}", path.display());
//! }
//! ```
//!
//! # Public API
//!
//! ## Extraction
//! - [`TelemetryExtractor`] - Scans subtitle text and emits telemetry records
//! - [`ExtractorConfig`] - Block size, dedup mode and timestamp separator
//! - [`resolve_telemetry_path`] - Derive the `.srt` path from a video path
//!
//! ## Data Types
//! - [`TelemetryRecord`] - One GPS-tagged caption sample
//! - [`TelemetryLog`] - Extraction result with records and statistics
//! - [`ExtractionStats`] - Scan counters for caller-side reporting
//!
//! ## Export
//! - [`export_to_csv`] - Write records to a CSV file
//! - [`export_log`] - Run all enabled exports for one extraction result
//! - [`compute_export_paths`] - Helper for consistent path computation
//!
//! ## Retention
//! - [`DedupMode`] - Per-frame (default) or per-minute retention
//! - [`retain_first_per_minute`] - First-record-per-minute filter
//!
//! ## Conversion
//! - [`format_timestamp`] - Render a millisecond offset as `HH:MM:SS<sep>mmm`
//! - [`TimestampSeparator`] - Comma (default) or colon rendering

// Module declarations
pub mod conversion;
pub mod error;
pub mod export;
pub mod filters;
pub mod parser;
pub mod types;

// Re-export everything from modules for convenience
#[allow(ambiguous_glob_reexports)]
pub use conversion::*;
#[allow(ambiguous_glob_reexports)]
pub use error::*;
#[allow(ambiguous_glob_reexports)]
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use filters::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;

// Re-export Result type for convenience
pub use error::Result;
