use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ExtendedColorType, RgbImage};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::tiff::write_rgb_tiff;
use crate::types::OutputFormat;

fn encode_into(
    file: &mut std::fs::File,
    img: &RgbImage,
    format: OutputFormat,
    jpeg_quality: u8,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (cols, rows) = img.dimensions();
    let mut writer = BufWriter::new(file);
    match format {
        OutputFormat::Jpeg => write_rgb_jpeg(&mut writer, cols, rows, img.as_raw(), jpeg_quality)?,
        OutputFormat::Tiff => write_rgb_tiff(&mut writer, cols, rows, img.as_raw())?,
        OutputFormat::Other(image_format) => image::write_buffer_with_format(
            &mut writer,
            img.as_raw(),
            cols,
            rows,
            ExtendedColorType::Rgb8,
            image_format,
        )?,
    }
    writer.flush()?;
    Ok(())
}

/// Temp file beside `output` that ends up with the mode a plain create would give
/// (0o666 minus the umask), or the mode of the file it replaces.
fn create_temp_output(dir: &Path, output: &Path) -> std::io::Result<NamedTempFile> {
    let mut tmp_builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // the process umask is applied to this at creation
        tmp_builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let tmp = tmp_builder.prefix(".aspectfit").tempfile_in(dir)?;

    if let Ok(existing) = std::fs::metadata(output) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    Ok(tmp)
}

/// Encode `img` according to the extension of `output` and replace `output` with it.
///
/// Bytes are written to a temporary file next to `output` and only persisted once the
/// encoder succeeded, so a failed save never leaves a truncated file behind.
pub fn save_rgb_image(img: &RgbImage, output: &Path, jpeg_quality: u8) -> Result<OutputFormat> {
    let format = OutputFormat::from_path(output)
        .ok_or_else(|| Error::encode(output, "unsupported or missing output extension"))?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = create_temp_output(dir, output).map_err(|e| Error::encode(output, e))?;
    debug!("Encoding {} into temporary file {:?}", format, tmp.path());

    encode_into(tmp.as_file_mut(), img, format, jpeg_quality)
        .map_err(|e| Error::encode(output, e))?;
    tmp.persist(output).map_err(|e| Error::encode(output, e.error))?;

    info!(
        "Wrote {}x{} {} to {:?}",
        img.width(),
        img.height(),
        format,
        output
    );
    Ok(format)
}
