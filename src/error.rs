//! Unified error types for sweeplog.
//!
//! This module provides a single [`SweeplogError`] enum covering all error
//! cases in the library, following the single-enum pattern used by crates
//! like `csv` and `serde_json`.
//!
//! Note that an empty scan result is deliberately *not* an error: the
//! scanner returns an empty `Vec` and the caller decides how to present it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for sweeplog operations.
///
/// # Example
///
/// ```rust
/// use sweeplog::error::Result;
/// use sweeplog::EventRecord;
///
/// fn my_function() -> Result<Vec<EventRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, SweeplogError>;

/// The error type for all sweeplog operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SweeplogError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes could not be decoded as UTF-8 text.
    ///
    /// LINE exports are UTF-8; anything else is rejected before the scan
    /// pass begins.
    #[error("Input is not valid UTF-8 text{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Decode {
        /// The file path, if available
        path: Option<PathBuf>,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// An empty keyword was supplied.
    ///
    /// The scanner requires a non-empty keyword; an empty string would
    /// match every line.
    #[error("Search keyword must not be empty")]
    InvalidKeyword,

    /// The requested format doesn't match what the operation expects.
    ///
    /// This occurs when:
    /// - An output path carries an unknown extension
    /// - A format requires a feature that is not enabled
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl SweeplogError {
    /// Creates a decode error for the given path.
    pub fn decode(source: std::string::FromUtf8Error, path: Option<PathBuf>) -> Self {
        SweeplogError::Decode { path, source }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        SweeplogError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, SweeplogError::Io(_))
    }

    /// Returns `true` if this is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, SweeplogError::Decode { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, SweeplogError::InvalidFormat { .. })
    }
}

impl From<std::string::FromUtf8Error> for SweeplogError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        SweeplogError::Decode {
            path: None,
            source: err,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = SweeplogError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_decode_error_with_path() {
        let invalid_bytes = vec![0xff, 0xfe];
        let utf8_err = String::from_utf8(invalid_bytes).unwrap_err();
        let err = SweeplogError::decode(utf8_err, Some(PathBuf::from("/path/to/talk.txt")));
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("/path/to/talk.txt"));
    }

    #[test]
    fn test_decode_error_without_path() {
        let invalid_bytes = vec![0xff, 0xfe];
        let utf8_err = String::from_utf8(invalid_bytes).unwrap_err();
        let err: SweeplogError = utf8_err.into();
        assert!(err.is_decode());
        assert!(!err.to_string().contains("file:"));
    }

    #[test]
    fn test_invalid_keyword_display() {
        let err = SweeplogError::InvalidKeyword;
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = SweeplogError::invalid_format("output", "unknown extension: '.xls'");
        let display = err.to_string();
        assert!(display.contains("output"));
        assert!(display.contains(".xls"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = SweeplogError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = SweeplogError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_decode());
        assert!(!io_err.is_invalid_format());

        let fmt_err = SweeplogError::invalid_format("output", "bad");
        assert!(fmt_err.is_invalid_format());
        assert!(!fmt_err.is_io());
    }
}
