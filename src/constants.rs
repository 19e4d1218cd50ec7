//! Default parameters for color extraction

/// Number of colors reported when no count is given
pub const DEFAULT_TOP_N: usize = 10;

/// Longest side, in pixels, of the thumbnail the histogram is computed on
pub const MAX_THUMBNAIL_DIMENSION: u32 = 200;

/// Number of distinct colors in 24-bit RGB
pub const RGB_COLOR_SPACE_SIZE: usize = 1 << 24;
