//! Shared types and enums used across aspectfit.
//! Includes `CropMode`, `ResampleFilter` and `OutputFormat`.
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which axis is trimmed after the uniform scale.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CropMode {
    /// Source is relatively taller than the target: width is matched, rows are cut.
    CutHeight,
    /// Source is relatively wider than the target: height is matched, columns are cut.
    CutWidth,
}

impl std::fmt::Display for CropMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropMode::CutHeight => write!(f, "CutHeight"),
            CropMode::CutWidth => write!(f, "CutWidth"),
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    Box,
    #[default]
    Bilinear,
    Hamming,
    CatmullRom,
    Mitchell,
    Gaussian,
    Lanczos3,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "Nearest"),
            ResampleFilter::Box => write!(f, "Box"),
            ResampleFilter::Bilinear => write!(f, "Bilinear"),
            ResampleFilter::Hamming => write!(f, "Hamming"),
            ResampleFilter::CatmullRom => write!(f, "CatmullRom"),
            ResampleFilter::Mitchell => write!(f, "Mitchell"),
            ResampleFilter::Gaussian => write!(f, "Gaussian"),
            ResampleFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

/// Encoder selected for an output path
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    Jpeg,
    Tiff,
    Other(image::ImageFormat),
}

impl OutputFormat {
    /// Resolve the output format from the path extension (case-insensitive).
    /// Returns `None` when the extension is missing or names no writable format.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "tif" | "tiff" => Some(OutputFormat::Tiff),
            other => {
                let format = image::ImageFormat::from_extension(other)?;
                if format.writing_enabled() {
                    Some(OutputFormat::Other(format))
                } else {
                    None
                }
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Jpeg => write!(f, "JPEG"),
            OutputFormat::Tiff => write!(f, "TIFF"),
            OutputFormat::Other(format) => write!(f, "{:?}", format),
        }
    }
}
