//! I/O layer: decoding inputs into RGB8 (`reader`) and the format-specific
//! encoders used for JPEG and TIFF outputs (`writers`). Other output formats
//! go through the `image` crate directly from `core::processing::save`.
pub mod reader;
pub use reader::read_rgb_image;

pub mod writers;
