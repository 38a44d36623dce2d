use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

pub const DEFAULT_TARGET_WIDTH: u32 = 500;
pub const DEFAULT_TARGET_HEIGHT: u32 = 300;
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Fixed output box every fitted image is brought to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub width: u32,
    pub height: u32,
}

impl TargetSpec {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let target = Self { width, height };
        target.validate()?;
        Ok(target)
    }

    /// Both sides must keep at least one pixel after the `dim - 1` crop.
    pub fn validate(&self) -> Result<()> {
        if self.width < 2 || self.height < 2 {
            return Err(Error::InvalidTarget {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// height / width
    pub fn ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_TARGET_WIDTH,
            height: DEFAULT_TARGET_HEIGHT,
        }
    }
}

/// Processing parameters suitable for preset files and the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitParams {
    pub target: TargetSpec,
    pub filter: ResampleFilter,
    /// Only used for JPEG output, 1..=100
    pub jpeg_quality: u8,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            target: TargetSpec::default(),
            filter: ResampleFilter::Bilinear,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl FitParams {
    pub fn validate(&self) -> Result<()> {
        self.target.validate()?;
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidArgument {
                arg: "jpeg_quality",
                value: self.jpeg_quality.to_string(),
            });
        }
        Ok(())
    }

    /// Parse preset text. Anything before the first `{` (the comment header) is skipped.
    pub fn from_preset_str(content: &str) -> Result<Self> {
        let json_start = content.find('{').ok_or_else(|| Error::InvalidArgument {
            arg: "preset",
            value: "no JSON content found".to_string(),
        })?;
        let params: FitParams = serde_json::from_str(&content[json_start..])?;
        params.validate()?;
        Ok(params)
    }

    pub fn load_preset(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let params = Self::from_preset_str(&content)?;
        info!("Preset loaded from: {:?}", path);
        Ok(params)
    }

    pub fn to_preset_string(&self) -> Result<String> {
        let mut preset_content = String::new();
        preset_content.push_str("// ==========================================\n");
        preset_content.push_str("// aspectfit preset\n");
        preset_content.push_str(&format!("// Version: {}\n", env!("CARGO_PKG_VERSION")));
        preset_content.push_str("// Note: Input/Output paths are not included in presets\n");
        preset_content.push_str("// ==========================================\n\n");
        preset_content.push_str(&serde_json::to_string_pretty(self)?);
        preset_content.push('\n');
        Ok(preset_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_500x300_box() {
        let params = FitParams::default();
        assert_eq!(params.target, TargetSpec::new(500, 300).unwrap());
        assert!((params.target.ratio() - 0.6).abs() < 1e-12);
        assert_eq!(params.filter, ResampleFilter::Bilinear);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_targets() {
        assert!(matches!(
            TargetSpec::new(1, 300),
            Err(Error::InvalidTarget { width: 1, height: 300 })
        ));
        assert!(matches!(
            TargetSpec::new(500, 0),
            Err(Error::InvalidTarget { .. })
        ));
        assert!(TargetSpec::new(2, 2).is_ok());
    }

    #[test]
    fn rejects_out_of_range_quality() {
        let params = FitParams {
            jpeg_quality: 0,
            ..FitParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidArgument { arg: "jpeg_quality", .. })
        ));
    }

    #[test]
    fn preset_skips_comment_header_and_fills_defaults() {
        let content = "// my preset\n// second line\n{ \"target\": { \"width\": 640, \"height\": 480 } }";
        let params = FitParams::from_preset_str(content).unwrap();
        assert_eq!(params.target, TargetSpec { width: 640, height: 480 });
        assert_eq!(params.filter, ResampleFilter::Bilinear);
        assert_eq!(params.jpeg_quality, DEFAULT_JPEG_QUALITY);
    }

    #[test]
    fn preset_string_reloads_to_same_params() {
        let params = FitParams {
            target: TargetSpec { width: 320, height: 200 },
            filter: ResampleFilter::Lanczos3,
            jpeg_quality: 75,
        };
        let text = params.to_preset_string().unwrap();
        assert!(text.starts_with("//"));
        assert_eq!(FitParams::from_preset_str(&text).unwrap(), params);
    }

    #[test]
    fn preset_with_invalid_target_is_rejected() {
        let content = "{ \"target\": { \"width\": 1, \"height\": 1 } }";
        assert!(matches!(
            FitParams::from_preset_str(content),
            Err(Error::InvalidTarget { .. })
        ));
    }

    #[test]
    fn preset_without_json_is_rejected() {
        assert!(matches!(
            FitParams::from_preset_str("// nothing here"),
            Err(Error::InvalidArgument { arg: "preset", .. })
        ));
    }
}
