//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Separates decode failures (input side) from encode failures (output side), and
//! provides semantic variants for parameter validation and resampling failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {path:?}: {message}")]
    Encode { path: PathBuf, message: String },

    #[error("Target dimensions must be at least 2x2, got: {width}x{height}")]
    InvalidTarget { width: u32, height: u32 },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Empty source image: {width}x{height}")]
    EmptySource { width: u32, height: u32 },

    #[error(
        "Scaled size for {source_width}x{source_height} into {target_width}x{target_height} exceeds u32"
    )]
    ScaleOverflow {
        source_width: u32,
        source_height: u32,
        target_width: u32,
        target_height: u32,
    },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preset error: {0}")]
    Preset(#[from] serde_json::Error),
}

impl Error {
    pub fn encode<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::Encode {
            path: path.into(),
            message: e.to_string(),
        }
    }

    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
