//! Color counting and conversion module
//!
//! This module handles hex formatting of colors and the frequency
//! histogram used to rank them.

pub mod conversion;
pub mod histogram;

pub use conversion::{hex_to_color, to_hex, Color};
pub use histogram::{color_histogram, rank_colors, top_colors};
