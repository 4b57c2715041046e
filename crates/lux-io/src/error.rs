//! Error types for image output.

use std::io;
use thiserror::Error;

/// Image output error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported file format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Encoding error reported by the format backend.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// The buffer was disabled at construction (zero dimensions).
    #[error("image is empty (invalid channel count or dimensions)")]
    EmptyImage,
}

/// Result type for image output.
pub type IoResult<T> = Result<T, IoError>;
