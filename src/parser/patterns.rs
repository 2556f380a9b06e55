//! Compiled pattern table for caption field extraction
//!
//! All patterns are static and compiled exactly once per extractor; they are
//! immutable configuration, not per-call state. Compilation failure of a
//! static pattern is a programming error and aborts at startup.

use regex::Regex;

/// The compiled regular expressions used to pull telemetry fields out of a
/// caption block.
#[derive(Debug)]
pub struct TelemetryPatterns {
    /// `H+:MM:SS,mmm` subtitle timecode; hours may be multi-digit
    pub timecode: Regex,
    /// `[latitude: <signed-float>]`
    pub latitude: Regex,
    /// `[longitude: <signed-float>]`
    pub longitude: Regex,
    /// `[rel_alt: <signed-float>` — DJI leaves the bracket unclosed
    pub rel_altitude: Regex,
    /// `abs_alt: <signed-float>`, no bracket
    pub abs_altitude: Regex,
    /// `YYYY-MM-DD HH:MM:SS.ffffff` datetime stamp
    pub datetime: Regex,
    /// `FrameCnt: <integer>`
    pub frame_count: Regex,
}

impl TelemetryPatterns {
    pub fn compile() -> Self {
        Self {
            timecode: Regex::new(r"(\d+):(\d{2}):(\d{2}),(\d{3})")
                .expect("static timecode pattern"),
            latitude: Regex::new(r"\[latitude:\s*([-\d.]+)\]").expect("static latitude pattern"),
            longitude: Regex::new(r"\[longitude:\s*([-\d.]+)\]")
                .expect("static longitude pattern"),
            rel_altitude: Regex::new(r"\[rel_alt:\s*([-\d.]+)")
                .expect("static rel_alt pattern"),
            abs_altitude: Regex::new(r"abs_alt:\s*([-\d.]+)").expect("static abs_alt pattern"),
            datetime: Regex::new(r"(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d+)")
                .expect("static datetime pattern"),
            frame_count: Regex::new(r"FrameCnt:\s*(\d+)").expect("static FrameCnt pattern"),
        }
    }
}

impl Default for TelemetryPatterns {
    fn default() -> Self {
        Self::compile()
    }
}

/// Extract the first capture group as a float
pub fn extract_float(pattern: &Regex, text: &str) -> Option<f64> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extract the first capture group as a string
pub fn extract_string(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract the first capture group as an unsigned integer
pub fn extract_u32(pattern: &Regex, text: &str) -> Option<u32> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_float() {
        let patterns = TelemetryPatterns::compile();
        let text = "[latitude: 31.123456] [longitude: -34.567890]";
        assert_eq!(extract_float(&patterns.latitude, text), Some(31.123456));
        assert_eq!(extract_float(&patterns.longitude, text), Some(-34.567890));
        assert_eq!(extract_float(&patterns.latitude, "no gps here"), None);
    }

    #[test]
    fn test_altitude_patterns_tolerate_missing_brackets() {
        let patterns = TelemetryPatterns::compile();
        let text = "[rel_alt: 50.000 abs_alt: 150.000]";
        assert_eq!(extract_float(&patterns.rel_altitude, text), Some(50.0));
        assert_eq!(extract_float(&patterns.abs_altitude, text), Some(150.0));
    }

    #[test]
    fn test_timecode_requires_fixed_widths() {
        let patterns = TelemetryPatterns::compile();
        assert!(patterns.timecode.is_match("00:00:00,033"));
        assert!(patterns.timecode.is_match("123:59:59,999"));
        assert!(!patterns.timecode.is_match("00:00:00.033"));
        assert!(!patterns.timecode.is_match("00:0:00,033"));
    }

    #[test]
    fn test_datetime_and_frame_count() {
        let patterns = TelemetryPatterns::compile();
        let text = "FrameCnt: 217, DiffTime: 33ms\n2024-12-22 15:08:01.000";
        assert_eq!(extract_u32(&patterns.frame_count, text), Some(217));
        assert_eq!(
            extract_string(&patterns.datetime, text),
            Some("2024-12-22 15:08:01.000".to_string())
        );
    }
}
