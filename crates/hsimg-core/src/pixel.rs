//! Pixel type and luma weights.
//!
//! Channels are plain `i32` values, conventionally in `[0, 255]`. The type
//! itself does not clamp - the codec and the transforms are responsible for
//! keeping values in range.

// ============================================================================
// Rec.601 Luma Constants
// ============================================================================

/// Rec.601 luma coefficient for the red channel.
///
/// Used in the luma formula: `Y = 0.299*R + 0.587*G + 0.114*B`
pub const LUMA_R: f64 = 0.299;

/// Rec.601 luma coefficient for the green channel.
pub const LUMA_G: f64 = 0.587;

/// Rec.601 luma coefficient for the blue channel.
pub const LUMA_B: f64 = 0.114;

/// The RGB values of a pixel.
///
/// # Example
///
/// ```
/// use hsimg_core::Pixel;
///
/// let p = Pixel::new(10, 20, 30);
/// assert_eq!(p.channels(), [10, 20, 30]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pixel {
    /// Red channel.
    pub red: i32,
    /// Green channel.
    pub green: i32,
    /// Blue channel.
    pub blue: i32,
}

impl Pixel {
    /// Creates a pixel from its three channels.
    #[inline]
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Creates a pixel with all three channels set to `value`.
    #[inline]
    pub fn splat(value: i32) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the channels as an `[R, G, B]` array.
    #[inline]
    pub fn channels(self) -> [i32; 3] {
        [self.red, self.green, self.blue]
    }

    /// Returns `true` if all three channels hold the same value.
    #[inline]
    pub fn is_grey(self) -> bool {
        self.red == self.green && self.green == self.blue
    }
}

/// Calculates the Rec.601 luma of a pixel, truncated toward zero.
///
/// `Y = floor(0.299*R + 0.587*G + 0.114*B)` for in-range channels. The
/// weighted sum is evaluated in f64 and narrowed through f32 before
/// truncation, so a pure white pixel maps to 255 rather than losing the
/// last representation ulp.
#[inline]
pub fn luma(pixel: Pixel) -> i32 {
    let grey = (LUMA_R * f64::from(pixel.red)
        + LUMA_G * f64::from(pixel.green)
        + LUMA_B * f64::from(pixel.blue)) as f32;
    grey as i32
}
