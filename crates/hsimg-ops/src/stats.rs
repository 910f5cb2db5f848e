//! Channel statistics.

use hsimg_core::Image;

/// Computes the global minimum and maximum over all three channels of all
/// pixels combined.
///
/// One scalar pair for the whole image, not a per-channel result: a pixel's
/// green value can set the maximum while another pixel's red value sets the
/// minimum.
///
/// Returns `None` for a zero-area image.
///
/// # Example
///
/// ```
/// use hsimg_core::{Image, Pixel};
/// use hsimg_ops::global_min_max;
///
/// let img = Image::from_pixels(2, 1, vec![Pixel::new(0, 100, 50), Pixel::new(30, 40, 60)])?;
/// assert_eq!(global_min_max(&img), Some((0, 100)));
/// # Ok::<(), hsimg_core::Error>(())
/// ```
pub fn global_min_max(image: &Image) -> Option<(i32, i32)> {
    let mut values = image.pixels().iter().flat_map(|p| p.channels());
    let first = values.next()?;
    let (mut min, mut max) = (first, first);
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsimg_core::Pixel;

    #[test]
    fn min_max_spans_channels() {
        let img = Image::from_pixels(
            2,
            1,
            vec![Pixel::new(0, 100, 50), Pixel::new(30, 40, 60)],
        )
        .unwrap();
        assert_eq!(global_min_max(&img), Some((0, 100)));
    }

    #[test]
    fn min_max_uniform() {
        let img = Image::filled(3, 3, Pixel::splat(77));
        assert_eq!(global_min_max(&img), Some((77, 77)));
    }

    #[test]
    fn min_max_empty() {
        let img = Image::from_pixels(0, 4, vec![]).unwrap();
        assert_eq!(global_min_max(&img), None);
    }

    #[test]
    fn min_max_unclamped_values() {
        let img = Image::from_pixels(1, 1, vec![Pixel::new(-5, 300, 0)]).unwrap();
        assert_eq!(global_min_max(&img), Some((-5, 300)));
    }
}
