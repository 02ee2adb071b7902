mod common;

use assert_cmd::Command;
use common::create_test_image;
use image::GenericImageView;
use predicates::prelude::*;
use std::fs;
use std::fs::File;
use tempfile::TempDir;

fn imgpress() -> Command {
    Command::cargo_bin("imgpress").unwrap()
}

#[test]
fn test_cli_help() {
    imgpress().arg("--help").assert().success();
}

#[test]
fn test_missing_input_arg() {
    imgpress().assert().failure();
}

#[test]
fn test_nonexistent_input_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.jpg");

    imgpress()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));

    assert!(!dir.path().join("nope_compressed.jpg").exists());
}

#[test]
fn test_output_equal_to_input_rejected() {
    let dir = TempDir::new().unwrap();
    let input = create_test_image(dir.path(), "photo.jpg", 64, 64);

    imgpress()
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid output path"));
}

#[test]
fn test_compress_jpeg_default_output() {
    let dir = TempDir::new().unwrap();
    let input = create_test_image(dir.path(), "photo.jpg", 320, 240);

    imgpress().arg(&input).assert().success();

    let output = dir.path().join("photo_compressed.jpg");
    assert!(output.exists());
    let img = image::open(&output).unwrap();
    assert_eq!(img.dimensions(), (320, 240));
}

#[test]
fn test_half_scale_jpeg_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = create_test_image(dir.path(), "photo.jpg", 2000, 1000);
    let original_bytes = fs::read(&input).unwrap();

    imgpress()
        .arg(&input)
        .args(["--max-width", "1000", "--max-height", "0", "-q", "85"])
        .assert()
        .success();

    let output = dir.path().join("photo_compressed.jpg");
    let img = image::open(&output).unwrap();
    assert_eq!(img.dimensions(), (1000, 500));
    assert!(fs::metadata(&output).unwrap().len() < original_bytes.len() as u64);

    // The input file is never modified
    assert_eq!(fs::read(&input).unwrap(), original_bytes);
}

#[test]
fn test_explicit_output_path() {
    let dir = TempDir::new().unwrap();
    let input = create_test_image(dir.path(), "photo.png", 64, 64);
    let output = dir.path().join("custom.png");

    imgpress()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();
    assert!(output.exists());
}

#[test]
fn test_missing_output_directory_fails() {
    let dir = TempDir::new().unwrap();
    let input = create_test_image(dir.path(), "photo.jpg", 64, 64);
    let output = dir.path().join("no_such_dir").join("out.jpg");

    imgpress()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Write failed"));
}

#[test]
fn test_zero_byte_png_is_corrupt_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.png");
    File::create(&input).unwrap();

    imgpress()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt image"));

    assert!(!dir.path().join("empty_compressed.png").exists());
}

#[test]
fn test_unsupported_format_rejected() {
    let dir = TempDir::new().unwrap();
    let input = create_test_image(dir.path(), "photo.bmp", 32, 32);

    imgpress()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format"));
}

#[test]
fn test_quality_above_range_is_clamped_not_rejected() {
    let dir = TempDir::new().unwrap();
    let input = create_test_image(dir.path(), "photo.jpg", 64, 64);

    imgpress().arg(&input).args(["-q", "150"]).assert().success();
}

#[test]
fn test_quality_below_range_is_clamped_not_rejected() {
    let dir = TempDir::new().unwrap();
    let input = create_test_image(dir.path(), "photo.jpg", 64, 64);

    imgpress()
        .arg(&input)
        .arg("--quality=-5")
        .assert()
        .success();
}

#[test]
fn test_gif_quality_has_no_effect() {
    let dir = TempDir::new().unwrap();
    let input = create_test_image(dir.path(), "anim.gif", 64, 64);
    let low = dir.path().join("low.gif");
    let high = dir.path().join("high.gif");

    imgpress()
        .arg(&input)
        .args(["-q", "5", "-o"])
        .arg(&low)
        .assert()
        .success();
    imgpress()
        .arg(&input)
        .args(["-q", "95", "-o"])
        .arg(&high)
        .assert()
        .success();

    assert_eq!(
        fs::metadata(&low).unwrap().len(),
        fs::metadata(&high).unwrap().len()
    );
}

#[test]
fn test_png_input_survives_pipeline_untouched() {
    let dir = TempDir::new().unwrap();
    let input = create_test_image(dir.path(), "scan.png", 200, 100);
    let before = fs::read(&input).unwrap();

    imgpress()
        .arg(&input)
        .args(["--max-width", "100"])
        .assert()
        .success();

    assert_eq!(fs::read(&input).unwrap(), before);
    let out = image::open(dir.path().join("scan_compressed.png")).unwrap();
    assert_eq!(out.dimensions(), (100, 50));
}

#[test]
fn test_quiet_mode_prints_nothing_on_success() {
    let dir = TempDir::new().unwrap();
    let input = create_test_image(dir.path(), "photo.jpg", 32, 32);

    imgpress()
        .arg(&input)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
