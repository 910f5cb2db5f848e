//! Monochrome conversion.

use hsimg_core::{luma, Image, Pixel};

/// Converts an image to monochrome, returning a new image.
///
/// Every output pixel has all three channels set to the Rec.601 luma of
/// the corresponding source pixel (see [`hsimg_core::luma`]); the source
/// is left untouched.
///
/// # Example
///
/// ```
/// use hsimg_core::{Image, Pixel};
/// use hsimg_ops::to_monochrome;
///
/// let img = Image::from_pixels(1, 1, vec![Pixel::new(10, 20, 30)])?;
/// let mono = to_monochrome(&img);
/// assert_eq!(mono.get(0, 0), Some(Pixel::splat(18)));
/// # Ok::<(), hsimg_core::Error>(())
/// ```
pub fn to_monochrome(image: &Image) -> Image {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        *pixel = Pixel::splat(luma(*pixel));
    }
    out
}
