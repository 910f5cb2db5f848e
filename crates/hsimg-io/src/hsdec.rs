//! HSDEC text format support.
//!
//! The format is whitespace-delimited ASCII: the `HSDEC` magic, width and
//! height, then `width * height` RGB records in row-major order:
//!
//! ```text
//! HSDEC <width> <height>
//! <r> <g> <b>
//! ...
//! ```
//!
//! Whitespace between tokens is flexible (spaces and newlines are
//! interchangeable) and anything after the last pixel record is ignored.

use crate::{IoError, IoResult};
use hsimg_core::{Image, Pixel};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, trace};

const HSDEC_MAGIC: &[u8] = b"HSDEC";

/// Reads an HSDEC file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    trace!(path = %path.display(), "hsdec::read");

    let mut file = File::open(path).map_err(|e| IoError::file_not_readable(path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| IoError::file_not_readable(path, e))?;

    decode(&bytes)
}

/// Writes an HSDEC file.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), "hsdec::write");

    let file = File::create(path).map_err(|e| IoError::write_failed(path, e))?;
    let mut writer = BufWriter::new(file);
    encode_into(&mut writer, image).map_err(|e| IoError::write_failed(path, e))?;
    writer.flush().map_err(|e| IoError::write_failed(path, e))?;
    Ok(())
}

/// Decodes an HSDEC stream into an [`Image`].
///
/// On any failure no partial image is returned. The magic is matched as a
/// byte prefix, so it need not be separated from the width by whitespace.
///
/// # Errors
///
/// - [`IoError::InvalidHeader`] if the stream does not start with `HSDEC`
/// - [`IoError::MalformedDimensions`] if width or height is missing,
///   unparsable, or negative
/// - [`IoError::MalformedPixelData`] if fewer than `width * height * 3`
///   values remain or any of them is unparsable
pub fn decode(bytes: &[u8]) -> IoResult<Image> {
    let mut tokens = Tokens::new(bytes);

    tokens.skip_whitespace();
    if !tokens.consume_prefix(HSDEC_MAGIC) {
        return Err(IoError::InvalidHeader("HSDEC magic not found".into()));
    }

    let width = tokens
        .next_i32()
        .ok_or_else(|| IoError::MalformedDimensions("missing or unparsable width".into()))?;
    let height = tokens
        .next_i32()
        .ok_or_else(|| IoError::MalformedDimensions("missing or unparsable height".into()))?;
    if width < 0 || height < 0 {
        return Err(IoError::MalformedDimensions(format!(
            "dimensions must be non-negative, got {} x {}",
            width, height
        )));
    }

    let count = width as usize * height as usize;
    let mut data = Vec::with_capacity(count);
    for i in 0..count {
        let red = tokens.next_i32();
        let green = tokens.next_i32();
        let blue = tokens.next_i32();
        match (red, green, blue) {
            (Some(r), Some(g), Some(b)) => data.push(Pixel::new(r, g, b)),
            _ => {
                return Err(IoError::MalformedPixelData(format!(
                    "pixel record {} of {}",
                    i, count
                )))
            }
        }
    }

    debug!(width, height, "decoded HSDEC image");
    Ok(Image::from_pixels(width as u32, height as u32, data)?)
}

/// Encodes an [`Image`] as HSDEC bytes.
///
/// `decode(&encode(img)?)` reproduces the same integers for any image
/// (round-trip on values, not on byte-level whitespace).
pub fn encode(image: &Image) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(&mut out, image)?;
    Ok(out)
}

fn encode_into<W: Write>(writer: &mut W, image: &Image) -> std::io::Result<()> {
    write!(writer, "HSDEC ")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    for pixel in image.pixels() {
        writeln!(writer, "{} {} {}", pixel.red, pixel.green, pixel.blue)?;
    }
    Ok(())
}

/// HSDEC format reader.
#[derive(Debug, Default)]
pub struct HsdecReader;

impl HsdecReader {
    /// Creates a new reader.
    pub fn new() -> Self {
        Self
    }
}

impl crate::ImageReader for HsdecReader {
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<Image> {
        read(path)
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<Image> {
        decode(data)
    }
}

/// HSDEC format writer.
#[derive(Debug, Default)]
pub struct HsdecWriter;

impl HsdecWriter {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self
    }
}

impl crate::ImageWriter for HsdecWriter {
    fn write<P: AsRef<Path>>(&self, path: P, image: &Image) -> IoResult<()> {
        write(path, image)
    }

    fn write_to_memory(&self, image: &Image) -> IoResult<Vec<u8>> {
        encode(image)
    }
}

/// Whitespace-delimited token scanner over the raw stream.
///
/// Works on bytes rather than `str` so that ignored trailing content is
/// never required to be valid UTF-8.
struct Tokens<'a> {
    rest: &'a [u8],
}

impl<'a> Tokens<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { rest: bytes }
    }

    fn skip_whitespace(&mut self) {
        let start = self
            .rest
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(self.rest.len());
        self.rest = &self.rest[start..];
    }

    fn consume_prefix(&mut self, prefix: &[u8]) -> bool {
        if self.rest.starts_with(prefix) {
            self.rest = &self.rest[prefix.len()..];
            true
        } else {
            false
        }
    }

    /// Takes the next whitespace-delimited token and parses it as `i32`.
    ///
    /// Returns `None` at end of stream or when the token is not an integer;
    /// the token is consumed either way.
    fn next_i32(&mut self) -> Option<i32> {
        self.skip_whitespace();
        let end = self
            .rest
            .iter()
            .position(|b| b.is_ascii_whitespace())
            .unwrap_or(self.rest.len());
        if end == 0 {
            return None;
        }
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        std::str::from_utf8(token).ok()?.parse().ok()
    }
}
