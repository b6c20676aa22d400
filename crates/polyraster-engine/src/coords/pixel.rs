use super::Point;

/// Integer pixel coordinate.
///
/// Values outside the buffer are legal; writes to them are dropped by the
/// buffer rather than rejected here.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PixelCoord {
    pub x: i32,
    pub y: i32,
}

impl PixelCoord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rounds a model-space point to the nearest pixel.
    ///
    /// Ties round half away from zero (`2.5 -> 3`, `-2.5 -> -3`). Values beyond
    /// the `i32` range saturate, so a far off-canvas endpoint stays far
    /// off-canvas.
    ///
    /// Returns `None` for a non-finite point: it has no position at all, on or
    /// off the canvas.
    #[inline]
    pub fn from_point(p: Point) -> Option<Self> {
        p.is_finite().then(|| Self::new(round_coord(p.x), round_coord(p.y)))
    }
}

#[inline]
fn round_coord(v: f64) -> i32 {
    // `as` saturates at the integer bounds.
    v.round() as i32
}
