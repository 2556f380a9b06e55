use std::fmt;
use std::path::PathBuf;

/// Custom error types for SRT telemetry parsing
#[derive(Debug)]
pub enum SrtError {
    /// Telemetry file missing at the derived path
    NotFound(PathBuf),
    /// I/O errors
    Io(std::io::Error),
    /// Input bytes are not valid UTF-8 text
    Encoding(std::string::FromUtf8Error),
    /// Malformed path, or empty record set handed to an exporter
    InvalidInput(String),
    /// Export format error
    Export(String),
}

impl fmt::Display for SrtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SrtError::NotFound(path) => write!(f, "Telemetry file not found: {}", path.display()),
            SrtError::Io(err) => write!(f, "I/O error: {}", err),
            SrtError::Encoding(err) => write!(f, "Encoding error: {}", err),
            SrtError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SrtError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for SrtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SrtError::Io(err) => Some(err),
            SrtError::Encoding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SrtError {
    fn from(err: std::io::Error) -> Self {
        SrtError::Io(err)
    }
}

impl From<std::string::FromUtf8Error> for SrtError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        SrtError::Encoding(err)
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for SrtError {
    fn from(err: csv::Error) -> Self {
        // Surface the underlying I/O failure instead of csv's wrapper
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => SrtError::Io(io_err),
            other => SrtError::Export(format!("{:?}", other)),
        }
    }
}

pub type Result<T> = std::result::Result<T, SrtError>;
