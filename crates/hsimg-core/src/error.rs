//! Error types for hsimg-core operations.
//!
//! The [`Error`] enum covers the failure modes of buffer construction and
//! pixel access. I/O and format errors live in `hsimg-io`.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or accessing an image buffer.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel data length doesn't match the declared dimensions.
    ///
    /// Returned by [`crate::Image::from_pixels`] when the supplied vector
    /// doesn't hold exactly `width * height` pixels. The buffer is never
    /// constructed in this case.
    #[error("pixel data length {got} does not match {width}x{height} (expected {expected})")]
    DataLengthMismatch {
        /// Declared image width
        width: u32,
        /// Declared image height
        height: u32,
        /// Expected pixel count (`width * height`)
        expected: usize,
        /// Actual length of the supplied data
        got: usize,
    },

    /// Pixel coordinates are outside image bounds.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::DataLengthMismatch`] error.
    #[inline]
    pub fn data_length_mismatch(width: u32, height: u32, got: usize) -> Self {
        Self::DataLengthMismatch {
            width,
            height,
            expected: width as usize * height as usize,
            got,
        }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_length_mismatch_message() {
        let err = Error::data_length_mismatch(3, 2, 5);
        let msg = err.to_string();
        assert!(msg.contains("3x2"));
        assert!(msg.contains('6'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = Error::out_of_bounds(10, 4, 8, 8);
        let msg = err.to_string();
        assert!(msg.contains("(10, 4)"));
        assert!(msg.contains("8x8"));
    }
}
