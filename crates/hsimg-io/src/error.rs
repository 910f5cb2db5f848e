//! Error types for I/O operations.
//!
//! Provides unified error handling for HSDEC decode, encode, and file
//! access. Decode failures never yield a partial image - the error is the
//! only observable result.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// Input file could not be opened or read.
    #[error("file {} could not be read: {source}", .path.display())]
    FileNotReadable {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output file could not be created or written.
    #[error("file {} could not be written: {source}", .path.display())]
    WriteFailed {
        /// Path that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Stream does not start with the HSDEC magic.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Width or height missing or unparsable.
    #[error("malformed dimensions: {0}")]
    MalformedDimensions(String),

    /// Fewer pixel values than the dimensions declare, or an unparsable one.
    #[error("malformed pixel data: {0}")]
    MalformedPixelData(String),

    /// Buffer construction failed.
    #[error(transparent)]
    Image(#[from] hsimg_core::Error),

    /// Other file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl IoError {
    /// Creates an [`IoError::FileNotReadable`] for `path`.
    pub fn file_not_readable(path: &Path, source: io::Error) -> Self {
        Self::FileNotReadable {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an [`IoError::WriteFailed`] for `path`.
    pub fn write_failed(path: &Path, source: io::Error) -> Self {
        Self::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
