//! Software rasterization into an in-memory RGB grid.
//!
//! Responsibilities:
//! - own the pixel storage (`PixelBuffer`), allocated fallibly
//! - drop out-of-bounds writes silently; off-canvas geometry is never an error
//! - draw lines and polylines between pixel coordinates (`line`)

mod buffer;
mod line;

pub use buffer::{AllocError, PixelBuffer};
pub use line::{draw_line, draw_polyline};
