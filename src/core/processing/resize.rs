use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Box => ResizeAlg::Convolution(FilterType::Box),
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::Hamming => ResizeAlg::Convolution(FilterType::Hamming),
        ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
        ResampleFilter::Gaussian => ResizeAlg::Convolution(FilterType::Gaussian),
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Resample an RGB8 image to exactly `target_width` x `target_height`.
pub fn resize_rgb_image(
    img: &RgbImage,
    target_width: u32,
    target_height: u32,
    filter: ResampleFilter,
) -> Result<RgbImage> {
    let (width, height) = img.dimensions();
    debug!(
        "Resizing {}x{} -> {}x{} ({})",
        width, height, target_width, target_height, filter
    );

    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(width, height, img.as_raw().to_vec(), PixelType::U8x3)
        .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    RgbImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("resized buffer does not match target size".to_string()))
}
