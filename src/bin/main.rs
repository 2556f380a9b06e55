//! CLI binary for the DJI SRT telemetry parser
//!
//! This provides the command-line interface for the parser library. All
//! user-facing output lives here; the library only returns structured
//! results and errors.

use anyhow::{bail, Context, Result};
use clap::{Arg, Command};
use dji_srt_parser::{
    export_log, DedupMode, ExportOptions, ExtractorConfig, TelemetryExtractor,
    DEFAULT_BLOCK_SIZE,
};
use glob::glob;
use std::path::{Path, PathBuf};

fn build_command() -> Command {
    Command::new("DJI SRT Parser")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse DJI drone subtitle (SRT) telemetry files. Exports GPS flight data to CSV.")
        .arg(
            Arg::new("files")
                .help("SRT or video files to parse (.SRT, .MP4, .MOV extensions supported, case-insensitive, supports globbing; video paths resolve to the sibling SRT file)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed extraction statistics")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for output files (default: same as input file)")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Also export records to a JSON file (requires the `json` build feature)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("per-minute")
                .long("per-minute")
                .help("Keep only the first record of each whole minute instead of every caption block")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("block-size")
                .long("block-size")
                .help("Number of caption lines searched after each timecode (default: 12)")
                .value_name("LINES")
                .value_parser(clap::value_parser!(usize)),
        )
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    let export_json = matches.get_flag("json");
    let per_minute = matches.get_flag("per-minute");
    let output_dir = matches.get_one::<String>("output-dir").cloned();
    let block_size = matches
        .get_one::<usize>("block-size")
        .copied()
        .unwrap_or(DEFAULT_BLOCK_SIZE);
    let file_patterns: Vec<&String> = matches.get_many::<String>("files").unwrap().collect();

    let extractor = TelemetryExtractor::with_config(ExtractorConfig {
        block_size,
        dedup: if per_minute {
            DedupMode::PerMinute
        } else {
            DedupMode::PerFrame
        },
        ..ExtractorConfig::default()
    });

    let export_options = ExportOptions {
        csv: true, // CSV export is always enabled for the CLI binary
        json: export_json,
        output_dir,
    };

    let mut processed_files = 0;

    if debug {
        println!("Input patterns: {file_patterns:?}");
    }

    // Collect all valid file paths
    let mut valid_paths = Vec::new();
    for pattern in &file_patterns {
        if debug {
            println!("Processing pattern: {pattern}");
        }

        let paths: Vec<_> = if pattern.contains('*') || pattern.contains('?') {
            match glob(pattern) {
                Ok(glob_iter) => {
                    let collected = glob_iter.collect::<Result<Vec<_>, _>>();
                    match collected {
                        Ok(paths) => {
                            if debug {
                                println!("Glob pattern '{pattern}' matched {} files", paths.len());
                            }
                            paths
                        }
                        Err(e) => {
                            eprintln!("Error expanding glob pattern '{pattern}': {e}");
                            continue;
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Invalid glob pattern '{pattern}': {e}");
                    continue;
                }
            }
        } else {
            vec![Path::new(pattern).to_path_buf()]
        };

        for path in paths {
            if debug {
                println!("Checking file: {path:?}");
            }

            if !path.exists() {
                eprintln!("Warning: File does not exist: {path:?}");
                continue;
            }

            let valid_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| {
                    let ext_lower = ext.to_ascii_lowercase();
                    ext_lower == "srt" || ext_lower == "mp4" || ext_lower == "mov"
                })
                .unwrap_or(false);

            if !valid_extension {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("none");
                eprintln!("Warning: Skipping file with unsupported extension '{ext}': {path:?}");
                continue;
            }

            if debug {
                println!("Added valid file: {path:?}");
            }
            valid_paths.push(path);
        }
    }

    if valid_paths.is_empty() {
        eprintln!("Error: No valid files found to process.");
        eprintln!("Supported extensions: .SRT, .MP4, .MOV (case-insensitive)");
        eprintln!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    if debug {
        println!("Found {} valid files to process", valid_paths.len());
    }

    // Process files using the library API
    for (index, path) in valid_paths.iter().enumerate() {
        if index > 0 {
            println!();
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        println!("Processing: {filename}");

        match process_file(&extractor, path, &export_options, debug) {
            Ok(record_count) => {
                if debug {
                    println!("Successfully processed {filename} ({record_count} records)");
                }
                processed_files += 1;
            }
            Err(e) => {
                eprintln!("Error processing {filename}: {e}");
                eprintln!("Continuing with next file...");
            }
        }
    }

    if processed_files == 0 {
        eprintln!(
            "Error: No files were successfully processed out of {} files found.",
            valid_paths.len()
        );
        eprintln!("This could be due to:");
        eprintln!("  - Missing .SRT files next to the given video files");
        eprintln!("  - Caption streams without embedded GPS telemetry");
        eprintln!("  - Files not being UTF-8 encoded subtitle text");
        eprintln!("Use --debug flag for more detailed error information.");
        std::process::exit(1);
    }

    Ok(())
}

fn process_file(
    extractor: &TelemetryExtractor,
    path: &PathBuf,
    export_options: &ExportOptions,
    debug: bool,
) -> Result<usize> {
    let log = extractor
        .extract_file(path)
        .with_context(|| format!("Failed to extract telemetry from {path:?}"))?;

    if debug {
        println!(
            "Scanned {} lines, matched {} timecodes, skipped {} without GPS",
            log.stats.lines_scanned, log.stats.timecodes_matched, log.stats.skipped_no_gps
        );
        if log.stats.deduplicated > 0 {
            println!(
                "Per-minute mode dropped {} duplicate records",
                log.stats.deduplicated
            );
        }
    }

    if !log.has_gps_data() {
        bail!("No GPS data found in caption stream");
    }

    let report = export_log(&log, path, export_options)
        .with_context(|| format!("Failed to export records for {path:?}"))?;

    println!("Extracted {} records", report.record_count);
    if let Some(ref csv_path) = report.csv_path {
        println!("Exported flight data to: {}", csv_path.display());
    }
    if let Some(ref json_path) = report.json_path {
        println!("Exported JSON to: {}", json_path.display());
    }

    Ok(report.record_count)
}
