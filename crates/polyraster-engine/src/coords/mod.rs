//! Coordinate types shared by the transform and raster stages.
//!
//! Canonical pixel space:
//! - Origin top-left
//! - +X right, +Y down
//! - One unit per pixel
//!
//! Model-space points are real-valued and become pixel coordinates only at
//! rasterization time, via [`PixelCoord::from_point`].

mod pixel;
mod point;

pub use pixel::PixelCoord;
pub use point::Point;
