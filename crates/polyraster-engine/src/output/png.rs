use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageResult};

use crate::raster::PixelBuffer;

/// Writes `buf` as an 8-bit RGB PNG.
pub fn write_png<W: Write>(buf: &PixelBuffer, out: &mut W) -> ImageResult<()> {
    let bytes = buf.to_rgb_bytes();
    PngEncoder::new(out).write_image(&bytes, buf.width(), buf.height(), ExtendedColorType::Rgb8)
}
