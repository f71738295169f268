//! Error types for trueno-hist operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring, rendering or exporting a histogram.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Datasets were added but none of them holds a single sample.
    #[error("Empty data provided: {datasets} dataset(s) without samples")]
    EmptyData {
        /// Number of (empty) datasets.
        datasets: usize,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The surface has zero area, so there is no framebuffer to export.
    #[error("Surface has no backing buffer (size is {width}x{height})")]
    NoSurface {
        /// Logical width.
        width: f32,
        /// Logical height.
        height: f32,
    },

    /// Configuration parse error.
    #[error("Config parse error at line {line}: {message}")]
    Config {
        /// Line number (1-based, 0 when unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_empty_data_mentions_count() {
        let err = Error::EmptyData { datasets: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_no_surface_reports_size() {
        let err = Error::NoSurface {
            width: 0.0,
            height: 50.0,
        };
        let display = err.to_string();
        assert!(display.contains("no backing buffer"));
        assert!(display.contains("0x50"));
    }

    #[test]
    fn test_config_error_includes_line() {
        let err = Error::Config {
            line: 4,
            message: "invalid type".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("line 4"));
        assert!(display.contains("invalid type"));
    }

    #[test]
    fn test_io_from() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
