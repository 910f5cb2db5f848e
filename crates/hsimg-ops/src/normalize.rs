//! Global min-max intensity normalization.

use crate::stats::global_min_max;
use hsimg_core::Image;
use tracing::{debug, info};

/// Stretches the observed intensity range of an image to `[0, 255]`,
/// in place.
///
/// A single global minimum and maximum are computed over all three
/// channels of all pixels combined ([`global_min_max`]) and every channel
/// value `v` becomes `(v - min) * 255 / range` with truncating integer
/// division. The same scalar min/max is applied to every channel; this is
/// deliberately not a per-channel stretch.
///
/// The computed minimum and maximum are reported on the `tracing` channel
/// (fields `min` and `max`).
///
/// A uniform image (`max == min`) and a zero-area image are left untouched;
/// both count as success, so the call has no failure mode.
///
/// # Example
///
/// ```
/// use hsimg_core::{Image, Pixel};
/// use hsimg_ops::normalize;
///
/// let mut img = Image::from_pixels(2, 1, vec![Pixel::splat(18), Pixel::splat(124)])?;
/// normalize(&mut img);
/// assert_eq!(img.get(0, 0), Some(Pixel::splat(0)));
/// assert_eq!(img.get(1, 0), Some(Pixel::splat(255)));
/// # Ok::<(), hsimg_core::Error>(())
/// ```
pub fn normalize(image: &mut Image) {
    let Some((min, max)) = global_min_max(image) else {
        debug!("normalize: zero-area image, nothing to do");
        return;
    };

    info!(min, max, "global intensity range");

    let range = max - min;
    if range == 0 {
        debug!("normalize: uniform image, already normalized");
        return;
    }

    for pixel in image.pixels_mut() {
        pixel.red = (pixel.red - min) * 255 / range;
        pixel.green = (pixel.green - min) * 255 / range;
        pixel.blue = (pixel.blue - min) * 255 / range;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsimg_core::Pixel;

    #[test]
    fn stretches_to_full_range() {
        let mut img = Image::from_pixels(
            2,
            1,
            vec![Pixel::new(50, 100, 75), Pixel::new(60, 90, 80)],
        )
        .unwrap();

        normalize(&mut img);

        // min 50 -> 0, max 100 -> 255, everything else by truncation.
        assert_eq!(global_min_max(&img), Some((0, 255)));
        assert_eq!(img.get(0, 0), Some(Pixel::new(0, 255, 127)));
        assert_eq!(img.get(1, 0), Some(Pixel::new(51, 204, 153)));
    }

    #[test]
    fn uniform_image_is_untouched() {
        let mut img = Image::filled(2, 2, Pixel::splat(93));
        let before = img.clone();
        normalize(&mut img);
        assert_eq!(img, before);
    }

    #[test]
    fn zero_area_image_is_untouched() {
        let mut img = Image::from_pixels(0, 0, vec![]).unwrap();
        normalize(&mut img);
        assert!(img.is_empty());
    }

    #[test]
    fn truncating_division() {
        // Range 10: value 7 maps to 7 * 255 / 10 = 178 (178.5 truncated).
        let mut img = Image::from_pixels(
            3,
            1,
            vec![Pixel::splat(0), Pixel::splat(7), Pixel::splat(10)],
        )
        .unwrap();

        normalize(&mut img);
        assert_eq!(img.get(1, 0), Some(Pixel::splat(178)));
    }

    #[test]
    fn shared_min_max_across_channels() {
        // min and max come from different channels of different pixels;
        // every channel is rescaled against the same pair.
        let mut img = Image::from_pixels(
            2,
            1,
            vec![Pixel::new(0, 100, 50), Pixel::new(30, 40, 60)],
        )
        .unwrap();

        normalize(&mut img);
        assert_eq!(img.get(0, 0), Some(Pixel::new(0, 255, 127)));
        assert_eq!(img.get(1, 0), Some(Pixel::new(76, 102, 153)));
    }

    #[test]
    fn monochrome_then_normalize_end_to_end() {
        let img = Image::from_pixels(
            2,
            1,
            vec![Pixel::new(10, 20, 30), Pixel::new(200, 100, 50)],
        )
        .unwrap();

        let mut mono = crate::to_monochrome(&img);
        assert_eq!(mono.pixels(), &[Pixel::splat(18), Pixel::splat(124)]);

        normalize(&mut mono);
        assert_eq!(mono.pixels(), &[Pixel::splat(0), Pixel::splat(255)]);
    }
}
