//! Image decoding and thumbnailing
//!
//! This module is the only place that talks to the `image` crate's decoders.
//! Any raster format the `image` crate decodes is accepted (PNG, JPEG, GIF,
//! WebP, TIFF, BMP, ICO, TGA, PNM, QOI and others). The format is sniffed
//! from the file contents first and falls back to the file extension.
//!
//! ## Design
//!
//! The loader normalizes every image to 8-bit RGB. Alpha is dropped rather
//! than composited, so a fully transparent pixel reports the color stored
//! underneath it. Palette and grayscale images are expanded to RGB.

use image::imageops;
use image::{DynamicImage, ImageReader, RgbImage};
use log::debug;
use std::path::Path;

use crate::error::{ExtractionError, Result};

/// Decode an image file into memory
///
/// The file handle is owned by the reader and closed when decoding returns,
/// on both the success and error paths.
///
/// # Errors
///
/// Returns `ExtractionError::DecodeError` if:
/// - File cannot be opened
/// - Format is not supported
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use extract_colors::image_loader::load_image;
/// use std::path::Path;
///
/// let img = load_image(Path::new("screenshot.png"))?;
/// println!("Loaded image: {}x{}", img.width(), img.height());
/// # Ok::<(), extract_colors::ExtractionError>(())
/// ```
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path).map_err(|e| {
        ExtractionError::decode(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let reader = reader.with_guessed_format().map_err(|e| {
        ExtractionError::decode(format!("Failed to read image file: {}", path.display()), e)
    })?;

    let img = reader.decode().map_err(|e| {
        ExtractionError::decode(format!("Failed to decode image: {}", path.display()), e)
    })?;

    debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img)
}

/// Convert any decoded image to 3-channel 8-bit RGB, discarding alpha
pub fn normalize_rgb(img: &DynamicImage) -> RgbImage {
    match img {
        DynamicImage::ImageRgb8(rgb) => rgb.clone(),
        other => other.to_rgb8(),
    }
}

/// Compute thumbnail dimensions bounded by `max_dim` on both sides
///
/// Images already within the bound keep their size; they are never enlarged.
/// Otherwise the longer side becomes `max_dim` and the shorter side is scaled
/// by the same factor, rounded to nearest and kept at least 1 pixel.
pub fn bounded_dimensions(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    if width <= max_dim && height <= max_dim {
        return (width, height);
    }

    let scale = |short: u32, long: u32| -> u32 {
        let (short, long, max) = (short as u64, long as u64, max_dim as u64);
        let scaled = (short * max + long / 2) / long;
        scaled.clamp(1, max) as u32
    };

    if width >= height {
        (max_dim, scale(height, width))
    } else {
        (scale(width, height), max_dim)
    }
}

/// Shrink an RGB image so neither side exceeds `max_dim`
///
/// Uses area-averaging thumbnail resampling. Images already within the bound
/// are returned unchanged so their exact pixel values are preserved.
pub fn downscale(img: RgbImage, max_dim: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    let (new_width, new_height) = bounded_dimensions(width, height, max_dim);

    if (new_width, new_height) == (width, height) {
        return img;
    }

    debug!(
        "downscaling {}x{} to {}x{}",
        width, height, new_width, new_height
    );
    imageops::thumbnail(&img, new_width, new_height)
}
