use clap::Parser;
use std::path::PathBuf;

use aspectfit::ResampleFilter;

#[derive(Parser, Debug)]
#[command(
    name = "aspectfit",
    version,
    about = "Crop and resize an image to a fixed target size"
)]
pub struct CliArgs {
    /// Input image (any format the decoder recognizes)
    pub input: PathBuf,

    /// Output image; the format follows the extension
    pub output: PathBuf,

    /// Target width in pixels [default: 500, or the preset's value]
    #[arg(long)]
    pub width: Option<u32>,

    /// Target height in pixels [default: 300, or the preset's value]
    #[arg(long)]
    pub height: Option<u32>,

    /// Resampling filter used for both resize passes [default: bilinear, or the preset's value]
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// JPEG quality (1-100), only used for .jpg/.jpeg outputs [default: 90, or the preset's value]
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// JSON preset with target, filter and quality; explicit flags override it
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
