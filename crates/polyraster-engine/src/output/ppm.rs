use std::io::{self, Write};

use crate::raster::PixelBuffer;

/// Maximum channel value declared in the header.
pub const MAX_VAL: u8 = 255;

/// Writes `buf` as binary PPM:
///
/// ```text
/// P6\n
/// {width} {height}\n
/// 255\n
/// R G B R G B ...   (width*height triples, row-major, top row first)
/// ```
pub fn write_ppm<W: Write>(buf: &PixelBuffer, out: &mut W) -> io::Result<()> {
    write!(out, "P6\n{} {}\n{}\n", buf.width(), buf.height(), MAX_VAL)?;
    for px in buf.pixels() {
        out.write_all(&px.to_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Rgb;

    #[test]
    fn header_then_raw_triples() {
        let mut buf = PixelBuffer::new(2, 1).unwrap();
        buf.clear(Rgb::WHITE);
        buf.set(1, 0, Rgb::new(0x10, 0x20, 0x30));

        let mut bytes = Vec::new();
        write_ppm(&buf, &mut bytes).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 255, 255, 0x10, 0x20, 0x30]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn payload_length_matches_dimensions() {
        let buf = PixelBuffer::new(7, 3).unwrap();
        let mut bytes = Vec::new();
        write_ppm(&buf, &mut bytes).unwrap();
        assert_eq!(bytes.len(), "P6\n7 3\n255\n".len() + 7 * 3 * 3);
    }
}
