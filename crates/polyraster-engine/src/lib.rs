//! Polyraster engine crate.
//!
//! This crate owns the software rendering pipeline: model-space geometry,
//! affine transforms, the pixel buffer with its line rasterizer, and the
//! image writers that serialize a finished buffer.

pub mod coords;
pub mod paint;
pub mod transform;
pub mod raster;
pub mod output;

pub mod logging;
