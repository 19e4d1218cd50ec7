//! Command-line interface for extract_colors
//!
//! Prints the most common colors of an image file.

use extract_colors::constants::DEFAULT_TOP_N;
use extract_colors::{extract_colors, report, ExtractionError};
use std::io::{self, Write};
use std::{env, path::Path, process};

const USAGE: &str = "Usage: extract_colors <image_path>";
const TOP_N: usize = DEFAULT_TOP_N;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let image_path_arg = match env::args_os().nth(1) {
        Some(path) => path,
        None => {
            println!("{}", USAGE);
            process::exit(1);
        }
    };
    let image_path = Path::new(&image_path_arg);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let written = match extract_colors(image_path, TOP_N) {
        Ok(colors) => report::write_report(&mut out, image_path, TOP_N, &colors),
        Err(error @ ExtractionError::EmptyImageError { .. }) => {
            log::debug!("{}", error);
            report::write_empty_notice(&mut out, image_path)
        }
        Err(error) => {
            eprintln!("Extraction failed: {}", error);
            if let Some(source) = std::error::Error::source(&error) {
                eprintln!("Caused by: {}", source);
            }
            process::exit(1);
        }
    };

    if let Err(e) = written.and_then(|_| out.flush()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}
