//! Error types for XPT decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when decoding an XPT file.
///
/// Every parse error is fatal to the file being decoded: a malformed member
/// aborts the whole parse rather than returning a partial result. Offsets
/// refer to the byte position in the input buffer where decoding failed.
#[derive(Debug, Error)]
pub enum XptError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Fewer bytes available than a fixed-size record requires.
    #[error("truncated record at offset {offset}: fewer than 80 bytes remain")]
    TruncatedRecord { offset: usize },

    /// Library header marker absent or corrupt.
    #[error("invalid library header: {message}")]
    InvalidHeader { message: String },

    /// Expected member framing absent mid-stream.
    #[error("invalid member at offset {offset}: {message}")]
    InvalidMember { offset: usize, message: String },

    /// Bad type code or length in a NAMESTR record.
    #[error("invalid field descriptor at index {index}: {message}")]
    InvalidFieldDescriptor { index: usize, message: String },

    /// Degenerate or inconsistent row geometry.
    #[error("row layout error: {message}")]
    RowLayout { message: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for XPT operations.
pub type Result<T> = std::result::Result<T, XptError>;

impl XptError {
    /// Create a TruncatedRecord error.
    pub fn truncated(offset: usize) -> Self {
        Self::TruncatedRecord { offset }
    }

    /// Create an InvalidHeader error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create an InvalidMember error.
    pub fn invalid_member(offset: usize, message: impl Into<String>) -> Self {
        Self::InvalidMember {
            offset,
            message: message.into(),
        }
    }

    /// Create an InvalidFieldDescriptor error.
    pub fn invalid_field(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidFieldDescriptor {
            index,
            message: message.into(),
        }
    }

    /// Create a RowLayout error.
    pub fn row_layout(message: impl Into<String>) -> Self {
        Self::RowLayout {
            message: message.into(),
        }
    }
}
