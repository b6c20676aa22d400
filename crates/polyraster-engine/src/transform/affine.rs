use core::ops::{Mul, MulAssign};

use crate::coords::Point;

/// Row-major 3×3 matrix `[a, b, c, d, e, f, g, h, i]`.
///
/// Mapping (row vector times matrix, no perspective divide):
/// - `x' = x·a + y·d + g`
/// - `y' = x·b + y·e + h`
///
/// Affine form (third column `0, 0, 1`) is expected but not enforced; other
/// matrices are applied by raw multiplication.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    m: [f64; 9],
}

impl Affine {
    pub const IDENTITY: Affine = Affine { m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0] };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a transform from nine row-major entries.
    #[inline]
    pub const fn from_rows(m: [f64; 9]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::from_rows([sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0])
    }

    #[inline]
    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self::from_rows([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, tx, ty, 1.0])
    }

    /// Rotation by `radians`, counter-clockwise with +Y up.
    ///
    /// In pixel space (+Y down) this appears clockwise.
    #[inline]
    pub fn rotate(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_rows([c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0])
    }

    /// Matrix product `self × next`.
    ///
    /// With row-vector points this maps `p` to `p × self × next`: `self` is
    /// applied first, then `next`.
    pub fn compose(self, next: Affine) -> Self {
        let a = &self.m;
        let b = &next.m;
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = (0..3).map(|k| a[row * 3 + k] * b[k * 3 + col]).sum();
            }
        }
        Self { m: out }
    }

    /// Maps a model-space point.
    #[inline]
    pub fn apply(self, p: Point) -> Point {
        let m = &self.m;
        Point::new(
            p.x * m[0] + p.y * m[3] + m[6],
            p.x * m[1] + p.y * m[4] + m[7],
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `a * b` is [`Affine::compose`]: `a` applies first.
impl Mul for Affine {
    type Output = Affine;
    #[inline]
    fn mul(self, rhs: Affine) -> Affine {
        self.compose(rhs)
    }
}

impl MulAssign for Affine {
    #[inline]
    fn mul_assign(&mut self, rhs: Affine) {
        *self = self.compose(rhs);
    }
}
