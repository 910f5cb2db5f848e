//! # hsimg-io
//!
//! Image I/O for the HSDEC text format.
//!
//! # Architecture
//!
//! The crate follows a trait-based design so further formats can slot in:
//!
//! - [`ImageReader`] / [`ImageWriter`] - traits for format implementations
//! - [`hsdec`] - the HSDEC format module ([`HsdecReader`], [`HsdecWriter`])
//! - [`read`] / [`write`] - high-level file entry points
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hsimg_io::{read, write};
//!
//! let image = read("input.hsdec")?;
//! write("output.hsdec", &image)?;
//! ```
//!
//! In-memory decode/encode are available as [`hsdec::decode`] and
//! [`hsdec::encode`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod traits;

pub mod hsdec;

pub use error::{IoError, IoResult};
pub use hsdec::{HsdecReader, HsdecWriter};
pub use traits::{ImageReader, ImageWriter};

use hsimg_core::Image;
use std::path::Path;

/// Reads an HSDEC image from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or the stream is not a
/// well-formed HSDEC image; see [`hsdec::decode`] for the decode contract.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    hsdec::read(path)
}

/// Writes an HSDEC image to a file.
///
/// # Errors
///
/// Returns [`IoError::WriteFailed`] if the file cannot be created or
/// written.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    hsdec::write(path, image)
}
