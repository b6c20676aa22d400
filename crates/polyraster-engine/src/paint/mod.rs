//! Color model shared between the interpreter and the rasterizer.
//!
//! Scope: opaque 24-bit RGB only. There is no alpha and no blending; a write
//! replaces the previous cell value.

pub mod color;

pub use color::{ParseColorError, Rgb};
