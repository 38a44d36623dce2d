use std::path::Path;

use image::error::{LimitError, LimitErrorKind};
use image::{ImageError, ImageReader, RgbImage};
use tracing::{debug, info};

use crate::error::{Error, Result};

fn decode_error(path: &Path, source: ImageError) -> Error {
    Error::Decode {
        path: path.to_path_buf(),
        source,
    }
}

/// Decode any supported image into 3-channel RGB8. The format is sniffed from the
/// file content, so a misnamed extension still decodes. Alpha is dropped.
pub fn read_rgb_image(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_error(path, ImageError::IoError(e)))?;
    debug!("Detected input format {:?} for {:?}", reader.format(), path);

    let decoded = reader.decode().map_err(|e| decode_error(path, e))?;
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(decode_error(
            path,
            ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError)),
        ));
    }

    info!(
        "Decoded {:?}: {}x{} ({:?})",
        path,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(decoded.to_rgb8())
}
