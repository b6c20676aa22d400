use std::fmt;

use crate::paint::Rgb;

/// The pixel storage could not be obtained.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AllocError {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not enough memory for a {}x{} image", self.width, self.height)
    }
}

impl std::error::Error for AllocError {}

/// Fixed-size grid of colors in row-major order, top row first.
///
/// Invariants:
/// - `cells.len() == width * height`
/// - never resized after construction
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    cells: Vec<Rgb>,
}

impl PixelBuffer {
    /// Allocates a `width × height` buffer with every cell black.
    ///
    /// Callers are expected to [`clear`](Self::clear) with the background
    /// before drawing.
    pub fn new(width: u32, height: u32) -> Result<Self, AllocError> {
        let err = move || AllocError { width, height };
        let len = (width as usize).checked_mul(height as usize).ok_or_else(err)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| err())?;
        cells.resize(len, Rgb::BLACK);

        log::debug!("allocated {width}x{height} pixel buffer");
        Ok(Self { width, height, cells })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sets every cell to `color`.
    pub fn clear(&mut self, color: Rgb) {
        self.cells.fill(color);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Writes one cell. Coordinates outside the buffer are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = color;
        }
    }

    /// Reads one cell, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// All cells in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.cells
    }

    /// Packed `R, G, B` bytes for every cell, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.cells.iter().flat_map(|c| c.to_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_fills_every_cell() {
        let mut buf = PixelBuffer::new(3, 2).unwrap();
        buf.clear(Rgb::WHITE);
        assert_eq!(buf.pixels().len(), 6);
        assert!(buf.pixels().iter().all(|&c| c == Rgb::WHITE));
    }

    #[test]
    fn set_then_get() {
        let mut buf = PixelBuffer::new(4, 4).unwrap();
        buf.set(3, 1, Rgb::new(9, 8, 7));
        assert_eq!(buf.get(3, 1), Some(Rgb::new(9, 8, 7)));
        assert_eq!(buf.pixels()[4 + 3], Rgb::new(9, 8, 7));
    }

    #[test]
    fn out_of_bounds_set_is_ignored() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.clear(Rgb::WHITE);
        for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 2), (i32::MIN, i32::MAX)] {
            buf.set(x, y, Rgb::BLACK);
        }
        assert!(buf.pixels().iter().all(|&c| c == Rgb::WHITE));
    }

    #[test]
    fn out_of_bounds_get_is_none() {
        let buf = PixelBuffer::new(2, 2).unwrap();
        assert_eq!(buf.get(2, 0), None);
        assert_eq!(buf.get(0, -1), None);
    }

    #[test]
    fn rgb_bytes_are_row_major() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.set(1, 0, Rgb::new(1, 2, 3));
        buf.set(0, 1, Rgb::new(4, 5, 6));
        assert_eq!(
            buf.to_rgb_bytes(),
            vec![0, 0, 0, 1, 2, 3, 4, 5, 6, 0, 0, 0]
        );
    }

    #[test]
    fn absurd_size_fails_without_aborting() {
        let err = PixelBuffer::new(u32::MAX, u32::MAX).unwrap_err();
        assert_eq!(err, AllocError { width: u32::MAX, height: u32::MAX });
    }
}
