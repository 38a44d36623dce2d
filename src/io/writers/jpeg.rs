use jpeg_encoder::{ColorType, Encoder};
use std::io::Write;

pub fn write_rgb_jpeg<W: Write>(
    writer: W,
    cols: u32,
    rows: u32,
    rgb_data: &[u8],
    quality: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let cols = u16::try_from(cols).map_err(|_| format!("JPEG width {} exceeds 65535", cols))?;
    let rows = u16::try_from(rows).map_err(|_| format!("JPEG height {} exceeds 65535", rows))?;
    let encoder = Encoder::new(writer, quality);
    encoder.encode(rgb_data, cols, rows, ColorType::Rgb)?;
    Ok(())
}
