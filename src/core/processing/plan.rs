use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::params::TargetSpec;
use crate::error::{Error, Result};
use crate::types::CropMode;

/// Region kept from the intermediate (scaled) image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Geometry of one fit: uniform scale to cover the target, then center crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitPlan {
    pub source_width: u32,
    pub source_height: u32,
    pub mode: CropMode,
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub crop: CropRect,
    pub target: TargetSpec,
}

/// `round(value * num / den)`, half-up, on exact integers.
/// `None` when the result does not fit in a `u32`.
fn scale_round(value: u32, num: u32, den: u32) -> Option<u32> {
    let (value, num, den) = (value as u128, num as u128, den as u128);
    u32::try_from((2 * value * num + den) / (2 * den)).ok()
}

pub fn plan_fit(source_width: u32, source_height: u32, target: &TargetSpec) -> Result<FitPlan> {
    target.validate()?;
    if source_width == 0 || source_height == 0 {
        return Err(Error::EmptySource {
            width: source_width,
            height: source_height,
        });
    }

    // H / W >= TH / TW, cross-multiplied
    let taller = source_height as u64 * target.width as u64
        >= target.height as u64 * source_width as u64;

    let plan = if taller {
        let scaled_height = scale_round(source_height, target.width, source_width).ok_or(
            Error::ScaleOverflow {
                source_width,
                source_height,
                target_width: target.width,
                target_height: target.height,
            },
        )?;
        let offset = (scaled_height - target.height) / 2;
        FitPlan {
            source_width,
            source_height,
            mode: CropMode::CutHeight,
            scaled_width: target.width,
            scaled_height,
            // last column is dropped; the final resize restores the width
            crop: CropRect {
                x: 0,
                y: offset,
                width: target.width - 1,
                height: target.height,
            },
            target: *target,
        }
    } else {
        let scaled_width = scale_round(source_width, target.height, source_height).ok_or(
            Error::ScaleOverflow {
                source_width,
                source_height,
                target_width: target.width,
                target_height: target.height,
            },
        )?;
        let offset = (scaled_width - target.width) / 2;
        FitPlan {
            source_width,
            source_height,
            mode: CropMode::CutWidth,
            scaled_width,
            scaled_height: target.height,
            // last row is dropped; the final resize restores the height
            crop: CropRect {
                x: offset,
                y: 0,
                width: target.width,
                height: target.height - 1,
            },
            target: *target,
        }
    };

    debug!(
        "Fit plan: {}x{} (ratio {:.4}, target {:.4}) -> {} via {}x{}, crop {}x{} at ({}, {})",
        source_width,
        source_height,
        source_height as f64 / source_width as f64,
        target.ratio(),
        plan.mode,
        plan.scaled_width,
        plan.scaled_height,
        plan.crop.width,
        plan.crop.height,
        plan.crop.x,
        plan.crop.y
    );

    Ok(plan)
}
