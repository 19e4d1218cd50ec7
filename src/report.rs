//! Plain-text rendering of extraction results
//!
//! ```text
//! === Colors from shot.png ===
//! Top 10 most common colors:
//!
//! 1. #FF0000 - RGB(255, 0, 0) - Count: 2
//! ```

use std::io::{self, Write};
use std::path::Path;

use crate::ColorCount;

/// Format one ranked entry; `rank` is 1-based
pub fn format_entry(rank: usize, entry: &ColorCount) -> String {
    let (r, g, b) = entry.rgb();
    format!(
        "{}. {} - RGB({}, {}, {}) - Count: {}",
        rank,
        entry.hex(),
        r,
        g,
        b,
        entry.count
    )
}

/// Write the header and one line per color
///
/// The header always names the requested `top_n`, even when fewer colors exist.
pub fn write_report<W: Write>(
    out: &mut W,
    path: &Path,
    top_n: usize,
    colors: &[ColorCount],
) -> io::Result<()> {
    writeln!(out, "=== Colors from {} ===", path.display())?;
    writeln!(out, "Top {} most common colors:", top_n)?;
    writeln!(out)?;

    for (i, entry) in colors.iter().enumerate() {
        writeln!(out, "{}", format_entry(i + 1, entry))?;
    }

    Ok(())
}

/// Write the message shown when an image yields no colors
pub fn write_empty_notice<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Could not extract colors from {}", path.display())
}
