//! Export functionality for extracted telemetry
//!
//! Projects the record sequence onto the fixed CSV column contract, with an
//! optional JSON variant behind the `json` feature. Rows are written in
//! input order; callers needing a different order pre-sort.

use crate::error::{Result, SrtError};
use crate::types::{TelemetryLog, TelemetryRecord};
use std::path::{Path, PathBuf};

/// Fixed, ordered CSV column contract. Fields absent on a record render as
/// empty cells, never as a literal "null".
pub const CSV_HEADERS: [&str; 7] = [
    "COMMENTS",
    "VIDEO NAME",
    "ALTITUDE",
    "LONGITUDE",
    "LATITUDE",
    "TIME",
    "DATE",
];

/// Export options for controlling output formats
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub csv: bool,
    pub json: bool,
    pub output_dir: Option<String>,
}

/// Results of an export operation with the produced paths
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
    pub record_count: usize,
}

/// Output paths derived from the input file name
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Compute output paths: input file stem with the export extension, placed in
/// `output_dir` when set, beside the input otherwise.
pub fn compute_export_paths(input_path: &Path, options: &ExportOptions) -> ExportPaths {
    let base_name = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("telemetry");

    let output_dir = match options.output_dir {
        Some(ref dir) => PathBuf::from(dir),
        None => input_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf(),
    };

    ExportPaths {
        csv: output_dir.join(format!("{base_name}.csv")),
        json: output_dir.join(format!("{base_name}.json")),
    }
}

#[cfg(feature = "csv")]
fn format_optional_float(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Write records to a CSV file at `output_path`.
///
/// Rejects an empty record slice with [`SrtError::InvalidInput`]; a zero-row
/// file is never produced. An existing file at the destination is overwritten
/// unconditionally. The destination directory must already exist.
#[cfg(feature = "csv")]
pub fn export_to_csv(records: &[TelemetryRecord], output_path: &Path) -> Result<()> {
    if records.is_empty() {
        return Err(SrtError::InvalidInput("no records to export".to_string()));
    }

    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(CSV_HEADERS)?;

    for record in records {
        let altitude = format_optional_float(record.export_altitude());
        let longitude = record.longitude.to_string();
        let latitude = record.latitude.to_string();
        writer.write_record([
            record.comments.as_str(),
            record.video_name.as_str(),
            altitude.as_str(),
            longitude.as_str(),
            latitude.as_str(),
            record.time.as_str(),
            record.date.as_deref().unwrap_or(""),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write records as a pretty-printed JSON array at `output_path`.
///
/// Same contract as the CSV exporter: empty input is rejected, existing files
/// are overwritten, the destination directory must exist.
#[cfg(feature = "json")]
pub fn export_to_json(records: &[TelemetryRecord], output_path: &Path) -> Result<()> {
    use std::fs::File;
    use std::io::BufWriter;

    if records.is_empty() {
        return Err(SrtError::InvalidInput("no records to export".to_string()));
    }

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, records)
        .map_err(|e| SrtError::Export(e.to_string()))?;
    Ok(())
}

/// Run the enabled exports for one extraction result.
///
/// Creates a caller-requested `output_dir` when missing; the per-format
/// exporters themselves never create directories.
#[cfg(feature = "csv")]
pub fn export_log(
    log: &TelemetryLog,
    input_path: &Path,
    options: &ExportOptions,
) -> Result<ExportReport> {
    let paths = compute_export_paths(input_path, options);

    if let Some(ref dir) = options.output_dir {
        let dir = Path::new(dir);
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let mut report = ExportReport {
        csv_path: None,
        json_path: None,
        record_count: log.records.len(),
    };

    if options.csv {
        export_to_csv(&log.records, &paths.csv)?;
        report.csv_path = Some(paths.csv);
    }

    if options.json {
        #[cfg(feature = "json")]
        {
            export_to_json(&log.records, &paths.json)?;
            report.json_path = Some(paths.json);
        }
        #[cfg(not(feature = "json"))]
        return Err(SrtError::Export(
            "JSON export requires building with the `json` feature".to_string(),
        ));
    }

    Ok(report)
}
