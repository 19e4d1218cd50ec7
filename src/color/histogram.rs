//! Color frequency counting and ranking
//!
//! Counts every distinct RGB value across the full 24-bit color space and
//! orders the counts for reporting.
//!
//! Ranking order: count descending, then packed `0xRRGGBB` value ascending,
//! so equal counts always come out in the same order.

use image::RgbImage;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::color::conversion::{from_pixel, to_packed};
use crate::constants::RGB_COLOR_SPACE_SIZE;
use crate::ColorCount;

/// Count occurrences of each distinct color in an image
///
/// The returned entries are in no particular order. Their counts sum to the
/// number of pixels in `image`. An image with no pixels yields an empty list.
pub fn color_histogram(image: &RgbImage) -> Vec<ColorCount> {
    let pixel_count = image.width() as usize * image.height() as usize;
    let mut counts: HashMap<[u8; 3], u32> =
        HashMap::with_capacity(pixel_count.min(RGB_COLOR_SPACE_SIZE));

    for pixel in image.pixels() {
        *counts.entry(pixel.0).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(rgb, count)| ColorCount {
            color: from_pixel(&image::Rgb(rgb)),
            count,
        })
        .collect()
}

/// Ranking comparator: higher count first, ties by ascending RGB value
pub fn compare_ranked(a: &ColorCount, b: &ColorCount) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| to_packed(a.color).cmp(&to_packed(b.color)))
}

/// Sort colors most common first
pub fn rank_colors(mut colors: Vec<ColorCount>) -> Vec<ColorCount> {
    colors.sort_unstable_by(compare_ranked);
    colors
}

/// The `n` most common colors, or all of them if fewer exist
pub fn top_colors(colors: Vec<ColorCount>, n: usize) -> Vec<ColorCount> {
    let mut ranked = rank_colors(colors);
    ranked.truncate(n);
    ranked
}
