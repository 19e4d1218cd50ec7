//! # Extract Colors
//!
//! A Rust crate for finding the most common colors in an image.
//!
//! The pipeline:
//! - Decodes the image and normalizes it to 8-bit RGB (alpha is discarded)
//! - Shrinks it so neither side exceeds 200 pixels
//! - Counts every distinct RGB value
//! - Ranks colors by count, most common first
//!
//! ## Example
//!
//! ```rust,no_run
//! use extract_colors::extract_colors;
//! use std::path::Path;
//!
//! for entry in extract_colors(Path::new("screenshot.png"), 10)? {
//!     println!("{} x{}", entry.hex(), entry.count);
//! }
//! # Ok::<(), extract_colors::ExtractionError>(())
//! ```

use image::DynamicImage;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod report;

pub use color::Color;
pub use config::ExtractionConfig;
pub use error::{ExtractionError, Result};

/// A color and how many sampled pixels have it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorCount {
    /// The RGB color
    pub color: Color,
    /// Number of pixels with this color in the downscaled image
    pub count: u32,
}

impl ColorCount {
    /// Hex representation, e.g. `#0A1B2C`
    pub fn hex(&self) -> String {
        color::to_hex(self.color)
    }

    /// Channels as a `(red, green, blue)` tuple
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.color.red, self.color.green, self.color.blue)
    }
}

/// Find the `top_n` most common colors of an image file
///
/// This is the main entry point. It uses the default thumbnail bound.
///
/// # Returns
///
/// Up to `top_n` colors, most common first. Equal counts are ordered by
/// ascending `0xRRGGBB` value.
///
/// # Errors
///
/// Returns `ExtractionError` if:
/// - `top_n` is zero
/// - The image cannot be opened or decoded (`DecodeError`)
/// - The image has no pixels (`EmptyImageError`)
pub fn extract_colors(path: &Path, top_n: usize) -> Result<Vec<ColorCount>> {
    extract_with_config(path, &ExtractionConfig::with_top_n(top_n))
}

/// Find the most common colors of an image file using explicit parameters
pub fn extract_with_config(path: &Path, config: &ExtractionConfig) -> Result<Vec<ColorCount>> {
    config.validate()?;

    let img = image_loader::load_image(path)?;
    extract_from_image(&img, config).map_err(|e| match e {
        ExtractionError::EmptyImageError { .. } => ExtractionError::EmptyImageError {
            path: path.to_path_buf(),
        },
        other => other,
    })
}

/// Find the most common colors of an already decoded image
///
/// An image without pixels reports `EmptyImageError` with an empty path.
pub fn extract_from_image(img: &DynamicImage, config: &ExtractionConfig) -> Result<Vec<ColorCount>> {
    config.validate()?;

    let rgb = image_loader::normalize_rgb(img);
    let thumb = image_loader::downscale(rgb, config.max_dimension);

    let histogram = color::color_histogram(&thumb);
    debug!(
        "{} distinct colors in {}x{} thumbnail",
        histogram.len(),
        thumb.width(),
        thumb.height()
    );

    if histogram.is_empty() {
        warn!("image has no pixels to count");
        return Err(ExtractionError::EmptyImageError {
            path: Default::default(),
        });
    }

    Ok(color::top_colors(histogram, config.top_n))
}
