//! Image writers for a finished [`PixelBuffer`](crate::raster::PixelBuffer).
//!
//! - `ppm`: binary NETPBM `P6`, the native output format
//! - `png`: lossless PNG through the `image` crate
//!
//! Writers take any `io::Write`; opening, buffering, and cleaning up files is
//! the caller's job.

mod png;
mod ppm;

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::raster::PixelBuffer;

pub use png::write_png;
pub use ppm::{write_ppm, MAX_VAL};

/// Encoded file format of the rendered image.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Ppm,
    Png,
}

impl OutputFormat {
    /// Picks the format from the file extension; anything but `.png`
    /// (case-insensitive) is written as PPM.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => OutputFormat::Png,
            _ => OutputFormat::Ppm,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Ppm => "ppm",
            OutputFormat::Png => "png",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ppm" => Ok(OutputFormat::Ppm),
            "png" => Ok(OutputFormat::Png),
            other => Err(format!("unknown output format {other:?} (expected ppm or png)")),
        }
    }
}

/// Failure while serializing an image.
#[derive(Debug)]
pub enum WriteError {
    Io(io::Error),
    Encode(image::ImageError),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::Io(_) => f.write_str("error writing to output stream"),
            WriteError::Encode(_) => f.write_str("error encoding image"),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Io(e) => Some(e),
            WriteError::Encode(e) => Some(e),
        }
    }
}

impl From<io::Error> for WriteError {
    fn from(e: io::Error) -> Self {
        WriteError::Io(e)
    }
}

impl From<image::ImageError> for WriteError {
    fn from(e: image::ImageError) -> Self {
        WriteError::Encode(e)
    }
}

/// Serializes `buf` in `format` and flushes `out`.
pub fn write_image<W: Write>(buf: &PixelBuffer, format: OutputFormat, mut out: W) -> Result<(), WriteError> {
    log::debug!("encoding {}x{} image as {format}", buf.width(), buf.height());
    match format {
        OutputFormat::Ppm => write_ppm(buf, &mut out)?,
        OutputFormat::Png => write_png(buf, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
