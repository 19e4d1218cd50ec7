//! End-to-end tests for the `extract_colors` binary

use image::{Rgb, RgbImage};
use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_extract_colors"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run extract_colors")
}

fn fixture_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("extract_colors_cli_{}_{}", std::process::id(), name))
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = run(&[]);

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Usage: extract_colors <image_path>\n"
    );
}

#[test]
fn test_report_for_two_by_two_image() {
    let path = fixture_path("report.png");
    let mut img = RgbImage::new(2, 2);
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.put_pixel(1, 0, Rgb([255, 0, 0]));
    img.put_pixel(0, 1, Rgb([0, 255, 0]));
    img.put_pixel(1, 1, Rgb([0, 0, 255]));
    img.save(&path).expect("write fixture");

    let path_str = path.to_str().expect("temp path is UTF-8");
    let output = run(&[path_str]);
    let _ = std::fs::remove_file(&path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!(
        "=== Colors from {} ===\n\
         Top 10 most common colors:\n\
         \n\
         1. #FF0000 - RGB(255, 0, 0) - Count: 2\n\
         2. #0000FF - RGB(0, 0, 255) - Count: 1\n\
         3. #00FF00 - RGB(0, 255, 0) - Count: 1\n",
        path_str
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_missing_file_fails_without_stdout() {
    let output = run(&["no_such_image_anywhere.png"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to decode image"));
}

#[test]
fn test_extra_arguments_are_ignored() {
    let path = fixture_path("extra_args.png");
    RgbImage::from_pixel(3, 3, Rgb([1, 2, 3]))
        .save(&path)
        .expect("write fixture");

    let output = run(&[path.to_str().expect("temp path is UTF-8"), "ignored"]);
    let _ = std::fs::remove_file(&path);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout)
        .contains("1. #010203 - RGB(1, 2, 3) - Count: 9"));
}
