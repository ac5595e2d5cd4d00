//! Error types for presto-codec.

use std::io;
use thiserror::Error;

/// Codec error type
#[derive(Error, Debug)]
pub enum CodecError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format or bit depth
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Decoding error
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Invalid audio data
    #[error("Invalid audio data: {0}")]
    InvalidData(String),
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

// From trait implementations for external library errors at the API boundary.

impl From<hound::Error> for CodecError {
    fn from(e: hound::Error) -> Self {
        CodecError::Io(io::Error::other(e))
    }
}

impl From<presto_core::Error> for CodecError {
    fn from(e: presto_core::Error) -> Self {
        CodecError::InvalidData(e.to_string())
    }
}
