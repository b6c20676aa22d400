//! Affine transforms over model space.
//!
//! Points are homogeneous row vectors `(x, y, 1)` multiplied on the left of a
//! row-major 3×3 matrix, so translation lives in the bottom row and composing
//! `a.compose(b)`/`a * b` applies `a` first.

mod affine;

pub use affine::Affine;
