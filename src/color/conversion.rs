//! Color representation and hex conversion
//!
//! Colors are 8-bit sRGB triples. Hex strings are always written as
//! `#RRGGBB` with uppercase, zero-padded channels.

use palette::Srgb;

use crate::{ExtractionError, Result};

/// An 8-bit RGB color without alpha
pub type Color = Srgb<u8>;

/// Build a color from an `image` crate pixel
pub fn from_pixel(pixel: &image::Rgb<u8>) -> Color {
    let [r, g, b] = pixel.0;
    Srgb::new(r, g, b)
}

/// Pack a color into a 24-bit integer (`0xRRGGBB`)
pub fn to_packed(color: Color) -> u32 {
    (color.red as u32) << 16 | (color.green as u32) << 8 | color.blue as u32
}

/// Unpack a 24-bit integer (`0xRRGGBB`); bits above 24 are ignored
pub fn from_packed(value: u32) -> Color {
    Srgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Convert a color to its hexadecimal string
///
/// # Returns
///
/// Hex color string (e.g., "#0A1B2C")
pub fn to_hex(color: Color) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// Parse hexadecimal color string
///
/// # Arguments
///
/// * `hex` - Hex color string (e.g., "#FF0000" or "ff0000")
///
/// # Errors
///
/// Returns `ExtractionError::InvalidHexColor` if the string is not six hex digits
pub fn hex_to_color(hex: &str) -> Result<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 {
        return Err(ExtractionError::InvalidHexColor {
            value: hex.to_string(),
            reason: format!("expected 6 hex digits, got {}", digits.len()),
        });
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ExtractionError::InvalidHexColor {
            value: hex.to_string(),
            reason: "contains non-hex characters".to_string(),
        });
    }

    // Checked above: six ASCII hex digits always parse
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or_default();
    Ok(Srgb::new(channel(0), channel(2), channel(4)))
}
