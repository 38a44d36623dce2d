//! High-level, ergonomic library API: fit an in-memory image or a file on disk to
//! the target box. Prefer these entrypoints over the low-level processing modules
//! when integrating aspectfit.
use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage};
use tracing::info;

use crate::core::params::FitParams;
use crate::core::processing::crop::crop_rgb_image;
use crate::core::processing::plan::{FitPlan, plan_fit};
use crate::core::processing::resize::resize_rgb_image;
use crate::core::processing::save::save_rgb_image;
use crate::error::Result;
use crate::io::reader::read_rgb_image;
use crate::types::OutputFormat;

/// Result of a path-to-path fit
#[derive(Debug, Clone)]
pub struct FitReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub plan: FitPlan,
}

/// Scale `img` to cover the target box, center-crop the overshoot axis and
/// bring the result to exactly the target size.
pub fn fit_image(img: &RgbImage, params: &FitParams) -> Result<(RgbImage, FitPlan)> {
    params.validate()?;
    let plan = plan_fit(img.width(), img.height(), &params.target)?;

    let scaled = resize_rgb_image(img, plan.scaled_width, plan.scaled_height, params.filter)?;
    let cropped = crop_rgb_image(&scaled, &plan.crop);
    // The crop is one pixel short on the kept axis
    let fitted = resize_rgb_image(
        &cropped,
        params.target.width,
        params.target.height,
        params.filter,
    )?;

    Ok((fitted, plan))
}

/// Same as [`fit_image`] for any decoded image; converts to RGB8 first.
pub fn fit_dynamic(img: &DynamicImage, params: &FitParams) -> Result<(RgbImage, FitPlan)> {
    fit_image(&img.to_rgb8(), params)
}

/// Decode `input`, fit it and write the result to `output` (format from its extension).
pub fn fit_file(input: &Path, output: &Path, params: &FitParams) -> Result<FitReport> {
    // Reject bad params before paying for the decode
    params.validate()?;
    let source = read_rgb_image(input)?;
    let (fitted, plan) = fit_image(&source, params)?;
    info!(
        "Fitted {}x{} -> {}x{} ({})",
        plan.source_width,
        plan.source_height,
        fitted.width(),
        fitted.height(),
        plan.mode
    );

    let format = save_rgb_image(&fitted, output, params.jpeg_quality)?;

    Ok(FitReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        format,
        plan,
    })
}
