//! Integration tests for CSV output validation
//!
//! Verifies the fixed column contract, empty-cell rendering, quoting of
//! user-populated comment text, overwrite semantics and the export error
//! taxonomy.

use dji_srt_parser::{
    compute_export_paths, export_log, export_to_csv, ExportOptions, SrtError, TelemetryLog,
    TelemetryRecord,
};
use std::fs;
use tempfile::TempDir;

fn sample_records() -> Vec<TelemetryRecord> {
    vec![
        TelemetryRecord {
            frame_index: 1,
            video_name: "test_video".to_string(),
            timestamp_ms: 0,
            time: "00:00:00:000".to_string(),
            date: Some("2024-12-22".to_string()),
            latitude: 31.123456,
            longitude: 34.567890,
            rel_altitude: Some(50.0),
            abs_altitude: Some(150.0),
            comments: String::new(),
        },
        TelemetryRecord {
            frame_index: 2,
            video_name: "test_video".to_string(),
            timestamp_ms: 33,
            time: "00:00:00:033".to_string(),
            date: Some("2024-12-22".to_string()),
            latitude: 31.123457,
            longitude: 34.567891,
            rel_altitude: Some(50.1),
            abs_altitude: Some(150.1),
            comments: String::new(),
        },
        TelemetryRecord {
            frame_index: 3,
            video_name: "test_video".to_string(),
            timestamp_ms: 66,
            time: "00:00:00:066".to_string(),
            date: Some("2024-12-22".to_string()),
            latitude: 31.123458,
            longitude: 34.567892,
            rel_altitude: Some(50.2),
            abs_altitude: Some(150.2),
            comments: String::new(),
        },
    ]
}

#[test]
fn test_header_row_matches_column_contract() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("output.csv");

    export_to_csv(&sample_records(), &csv_path).expect("Export should succeed");

    let content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0], "COMMENTS,VIDEO NAME,ALTITUDE,LONGITUDE,LATITUDE,TIME,DATE",
        "Header row must match the fixed column contract"
    );
}

#[test]
fn test_row_count_is_records_plus_header() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("output.csv");

    let records = sample_records();
    export_to_csv(&records, &csv_path).expect("Export should succeed");

    let content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines.len(),
        records.len() + 1,
        "Expected one header row plus one row per record"
    );
}

#[test]
fn test_data_row_values_and_field_count() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("output.csv");

    export_to_csv(&sample_records(), &csv_path).expect("Export should succeed");

    let content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    let lines: Vec<&str> = content.lines().collect();

    let first_row: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(first_row.len(), 7, "Data rows must carry all 7 columns");
    assert_eq!(first_row[0], "", "COMMENTS defaults to an empty cell");
    assert_eq!(first_row[1], "test_video");
    assert_eq!(first_row[2].parse::<f64>().unwrap(), 150.0, "ALTITUDE is the absolute altitude");
    assert!((first_row[3].parse::<f64>().unwrap() - 34.567890).abs() < 1e-6);
    assert!((first_row[4].parse::<f64>().unwrap() - 31.123456).abs() < 1e-6);
    assert_eq!(first_row[5], "00:00:00:000");
    assert_eq!(first_row[6], "2024-12-22");
}

#[test]
fn test_missing_fields_render_as_empty_cells() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("output.csv");

    let records = vec![TelemetryRecord {
        frame_index: 0,
        video_name: "bare".to_string(),
        timestamp_ms: 0,
        time: "00:00:00:000".to_string(),
        date: None,
        latitude: 1.0,
        longitude: 2.0,
        rel_altitude: None,
        abs_altitude: None,
        comments: String::new(),
    }];
    export_to_csv(&records, &csv_path).expect("Export should succeed");

    let content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    let row: Vec<&str> = content.lines().nth(1).expect("Missing data row").split(',').collect();

    assert_eq!(row[2], "", "Absent altitude must be an empty cell");
    assert_eq!(row[6], "", "Absent date must be an empty cell");
    assert!(
        !content.to_lowercase().contains("null"),
        "No literal null tokens may appear in the output"
    );
}

#[test]
fn test_comment_with_comma_is_quoted() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("output.csv");

    let mut records = sample_records();
    records[0].comments = "over the lake, low pass".to_string();
    export_to_csv(&records, &csv_path).expect("Export should succeed");

    let content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert!(
        content.contains("\"over the lake, low pass\""),
        "Comma-bearing comment must be quoted: {content}"
    );

    // The quoted field must not change the parsed field count
    let data_line = content.lines().nth(1).expect("Missing data row");
    let naive_count = data_line.split(',').count();
    assert_eq!(
        naive_count, 8,
        "Sanity check: the raw line carries the embedded comma"
    );
}

#[test]
fn test_export_empty_records_is_invalid_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("output.csv");

    let err = export_to_csv(&[], &csv_path).expect_err("Empty export must be rejected");
    assert!(
        matches!(err, SrtError::InvalidInput(_)),
        "Expected InvalidInput, got: {err}"
    );
    assert!(
        !csv_path.exists(),
        "A zero-row file must never be produced"
    );
}

#[test]
fn test_export_to_nonexistent_directory_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("missing").join("output.csv");

    let err = export_to_csv(&sample_records(), &csv_path)
        .expect_err("Export into a missing directory must fail");
    assert!(matches!(err, SrtError::Io(_)), "Expected Io, got: {err}");
}

#[test]
fn test_export_overwrites_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("output.csv");
    fs::write(&csv_path, "old content").expect("Failed to seed file");

    export_to_csv(&sample_records(), &csv_path).expect("Export should succeed");

    let content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert!(!content.contains("old content"), "Old content must be gone");
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_export_log_places_csv_beside_input_by_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("DJI_0001.SRT");

    let mut log = TelemetryLog::new("DJI_0001".to_string());
    log.records = sample_records();

    let options = ExportOptions {
        csv: true,
        json: false,
        output_dir: None,
    };
    let report = export_log(&log, &input_path, &options).expect("Export should succeed");

    let csv_path = report.csv_path.expect("CSV path should be reported");
    assert_eq!(csv_path, temp_dir.path().join("DJI_0001.csv"));
    assert!(csv_path.exists(), "CSV file should exist beside the input");
    assert_eq!(report.record_count, 3);
}

#[test]
fn test_export_log_creates_requested_output_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let nonexistent_dir = temp_dir.path().join("nonexistent").join("output");
    let input_path = temp_dir.path().join("DJI_0001.SRT");

    let mut log = TelemetryLog::new("DJI_0001".to_string());
    log.records = sample_records();

    let options = ExportOptions {
        csv: true,
        json: false,
        output_dir: Some(nonexistent_dir.to_str().unwrap().to_string()),
    };
    let result = export_log(&log, &input_path, &options);
    assert!(
        result.is_ok(),
        "Export should succeed and create the requested directory"
    );
    assert!(
        nonexistent_dir.join("DJI_0001.csv").exists(),
        "CSV file should be created in the new directory"
    );
}

#[test]
fn test_compute_export_paths_defaults_to_input_parent() {
    let options = ExportOptions::default();
    let paths = compute_export_paths(std::path::Path::new("/data/flights/DJI_0042.SRT"), &options);
    assert_eq!(paths.csv, std::path::PathBuf::from("/data/flights/DJI_0042.csv"));
    assert_eq!(paths.json, std::path::PathBuf::from("/data/flights/DJI_0042.json"));
}

#[test]
fn test_compute_export_paths_honors_output_dir() {
    let options = ExportOptions {
        csv: true,
        json: false,
        output_dir: Some("/tmp/exports".to_string()),
    };
    let paths = compute_export_paths(std::path::Path::new("/data/flights/DJI_0042.SRT"), &options);
    assert_eq!(paths.csv, std::path::PathBuf::from("/tmp/exports/DJI_0042.csv"));
}

#[test]
fn test_export_options_defaults() {
    let opts = ExportOptions::default();
    assert!(!opts.csv, "Default CSV should be false");
    assert!(!opts.json, "Default JSON should be false");
    assert!(
        opts.output_dir.is_none(),
        "Default output_dir should be None"
    );
}

#[cfg(feature = "json")]
mod json_export {
    use super::*;
    use dji_srt_parser::export_to_json;

    #[test]
    fn test_json_export_writes_records() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let json_path = temp_dir.path().join("output.json");

        export_to_json(&sample_records(), &json_path).expect("JSON export should succeed");

        let content = fs::read_to_string(&json_path).expect("Failed to read JSON");
        assert!(content.contains("\"latitude\": 31.123456"));
        assert!(content.contains("\"video_name\": \"test_video\""));
    }

    #[test]
    fn test_json_export_empty_records_is_invalid_input() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let json_path = temp_dir.path().join("output.json");

        let err = export_to_json(&[], &json_path).expect_err("Empty export must be rejected");
        assert!(
            matches!(err, SrtError::InvalidInput(_)),
            "Expected InvalidInput, got: {err}"
        );
    }
}
