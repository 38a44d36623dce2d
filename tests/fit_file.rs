use std::path::{Path, PathBuf};

use aspectfit::{CropMode, Error, FitParams, OutputFormat, TargetSpec, fit_file};
use image::{Rgb, RgbImage};
use tempfile::TempDir;

fn write_source(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
    .save(&path)
    .unwrap();
    path
}

fn dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}

#[test]
fn wide_source_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "wide.png", 1000, 400);
    let output = dir.path().join("wide_out.png");

    let report = fit_file(&input, &output, &FitParams::default()).unwrap();

    assert_eq!(report.plan.mode, CropMode::CutWidth);
    assert_eq!(
        (report.plan.scaled_width, report.plan.scaled_height),
        (750, 300)
    );
    assert_eq!((report.plan.crop.x, report.plan.crop.width), (125, 500));
    assert_eq!(report.format, OutputFormat::Other(image::ImageFormat::Png));
    assert_eq!(dimensions(&output), (500, 300));
}

#[test]
fn tall_source_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "tall.png", 400, 1000);
    let output = dir.path().join("tall_out.jpg");

    let report = fit_file(&input, &output, &FitParams::default()).unwrap();

    assert_eq!(report.plan.mode, CropMode::CutHeight);
    assert_eq!(
        (report.plan.scaled_width, report.plan.scaled_height),
        (500, 1250)
    );
    assert_eq!((report.plan.crop.y, report.plan.crop.height), (475, 300));
    assert_eq!(report.format, OutputFormat::Jpeg);
    assert_eq!(dimensions(&output), (500, 300));
}

#[test]
fn rerunning_on_own_output_keeps_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "odd.png", 333, 777);
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");

    fit_file(&input, &first, &FitParams::default()).unwrap();
    let report = fit_file(&first, &second, &FitParams::default()).unwrap();

    assert_eq!(report.plan.mode, CropMode::CutHeight);
    assert_eq!(report.plan.crop.y, 0);
    assert_eq!(dimensions(&second), (500, 300));
}

#[test]
fn missing_input_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("never.png");

    let err = fit_file(
        &dir.path().join("missing.png"),
        &output,
        &FitParams::default(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(!output.exists());
}

#[test]
fn unsupported_output_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "in.png", 64, 64);
    let output = dir.path().join("out.nope");
    std::fs::write(&output, b"keep me").unwrap();

    let err = fit_file(&input, &output, &FitParams::default()).unwrap_err();

    assert!(matches!(err, Error::Encode { .. }));
    assert_eq!(std::fs::read(&output).unwrap(), b"keep me");
}

#[test]
fn tiff_output_with_custom_target() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "in.bmp", 300, 200);
    let output = dir.path().join("out.tif");
    let params = FitParams {
        target: TargetSpec::new(120, 160).unwrap(),
        ..FitParams::default()
    };

    let report = fit_file(&input, &output, &params).unwrap();

    assert_eq!(report.format, OutputFormat::Tiff);
    assert_eq!(report.plan.mode, CropMode::CutWidth);
    assert_eq!(dimensions(&output), (120, 160));
}
