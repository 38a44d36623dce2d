use image::RgbImage;
use image::imageops::crop_imm;
use tracing::debug;

use crate::core::processing::plan::CropRect;

/// Copy `rect` out of `img`. The rectangle comes from `plan_fit` and always lies
/// inside the scaled image.
pub fn crop_rgb_image(img: &RgbImage, rect: &CropRect) -> RgbImage {
    debug!(
        "Cropping {}x{} at ({}, {}) from {}x{}",
        rect.width,
        rect.height,
        rect.x,
        rect.y,
        img.width(),
        img.height()
    );
    crop_imm(img, rect.x, rect.y, rect.width, rect.height).to_image()
}
