use polyraster_engine::coords::{PixelCoord, Point};
use polyraster_engine::paint::Rgb;
use polyraster_engine::raster::{AllocError, PixelBuffer};
use polyraster_engine::transform::Affine;
use polyraster_script::{Header, Vertex};

use crate::config::RenderConfig;

/// Mutable state of one render run.
///
/// Owns the pixel buffer and the current transform/colors. One context is
/// created per script and threaded through every command; nothing is global.
#[derive(Debug)]
pub struct RenderContext {
    buffer: PixelBuffer,
    /// Accumulated model-to-pixel transform.
    pub transform: Affine,
    /// Color used by drawing commands.
    pub color: Rgb,
    /// Color the canvas was last cleared with.
    pub background: Rgb,
}

impl RenderContext {
    /// Allocates the canvas declared by `header` and clears it with the
    /// configured background. The transform starts as identity.
    pub fn new(header: Header, config: &RenderConfig) -> Result<Self, AllocError> {
        let mut buffer = PixelBuffer::new(header.width, header.height)?;
        buffer.clear(config.background);
        Ok(Self {
            buffer,
            transform: Affine::identity(),
            color: config.color,
            background: config.background,
        })
    }

    /// Maps a script vertex through the current transform and rounds it to a
    /// pixel. `None` when the transformed point is not finite.
    #[inline]
    pub fn to_pixel(&self, v: Vertex) -> Option<PixelCoord> {
        PixelCoord::from_point(self.transform.apply(Point::new(v.x, v.y)))
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Hands the finished canvas to the writer.
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }
}
