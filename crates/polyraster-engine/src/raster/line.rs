use crate::coords::PixelCoord;
use crate::paint::Rgb;

use super::PixelBuffer;

/// Draws the segment `p0`–`p1`, endpoints included.
///
/// Integer midpoint stepping along the major axis (the one with the larger
/// extent; x on ties). The minor axis advances once the accumulated error
/// reaches half a pixel, so at major step `i` the minor offset is
/// `floor(i·d_minor / d_major + 1/2)`.
///
/// The walk always starts from the endpoint with the smaller major
/// coordinate, so `draw_line(a, b)` and `draw_line(b, a)` plot the same
/// pixels. Steps outside the buffer's major-axis range are skipped before
/// walking; everything else goes through the clipping [`PixelBuffer::set`].
pub fn draw_line(buf: &mut PixelBuffer, p0: PixelCoord, p1: PixelCoord, color: Rgb) {
    if p0 == p1 {
        buf.set(p0.x, p0.y, color);
        return;
    }

    let dx = (p1.x as i64 - p0.x as i64).abs();
    let dy = (p1.y as i64 - p0.y as i64).abs();

    if dx >= dy {
        let (a, b) = if p0.x <= p1.x { (p0, p1) } else { (p1, p0) };
        let extent = buf.width();
        walk(a.x, a.y, b.x, b.y, extent, |x, y| buf.set(x, y, color));
    } else {
        let (a, b) = if p0.y <= p1.y { (p0, p1) } else { (p1, p0) };
        let extent = buf.height();
        walk(a.y, a.x, b.y, b.x, extent, |y, x| buf.set(x, y, color));
    }
}

/// Steps the major axis from `m0` to `m1` (`m0 < m1`) while the minor axis
/// moves from `n0` towards `n1`, calling `plot(major, minor)` for each step
/// whose major coordinate lies in `[0, extent)`.
fn walk(m0: i32, n0: i32, m1: i32, n1: i32, extent: u32, mut plot: impl FnMut(i32, i32)) {
    let d_major = m1 as i64 - m0 as i64;
    let d_minor = (n1 as i64 - n0 as i64).abs();
    let dir: i64 = if n1 >= n0 { 1 } else { -1 };
    debug_assert!(d_major > 0 && d_minor <= d_major);

    let first = (-(m0 as i64)).max(0);
    let last = (extent as i64 - 1 - m0 as i64).min(d_major);
    if first > last {
        return;
    }

    // Error state as it stands after `first` steps from the start:
    // 2·i·d_minor + d_major == offset·(2·d_major) + err, 0 <= err < 2·d_major.
    let two_major = 2 * d_major;
    let num = 2 * first as i128 * d_minor as i128 + d_major as i128;
    let mut offset = (num / two_major as i128) as i64;
    let mut err = (num % two_major as i128) as i64;

    for i in first..=last {
        // Both stay between the endpoints, so they fit in i32.
        plot((m0 as i64 + i) as i32, (n0 as i64 + dir * offset) as i32);

        err += 2 * d_minor;
        if err >= two_major {
            offset += 1;
            err -= two_major;
        }
    }
}

/// Joins consecutive points with [`draw_line`]; `closed` also joins the last
/// point back to the first.
///
/// A single point plots one pixel; an empty slice draws nothing.
pub fn draw_polyline(buf: &mut PixelBuffer, points: &[PixelCoord], closed: bool, color: Rgb) {
    match points {
        [] => {}
        [p] => draw_line(buf, *p, *p, color),
        _ => {
            for pair in points.windows(2) {
                draw_line(buf, pair[0], pair[1], color);
            }
            if closed && points.len() > 2 {
                draw_line(buf, points[points.len() - 1], points[0], color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    const INK: Rgb = Rgb::BLACK;

    fn p(x: i32, y: i32) -> PixelCoord { PixelCoord::new(x, y) }

    fn canvas(w: u32, h: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(w, h).unwrap();
        buf.clear(Rgb::WHITE);
        buf
    }

    fn inked(buf: &PixelBuffer) -> BTreeSet<(i32, i32)> {
        let mut set = BTreeSet::new();
        for y in 0..buf.height() as i32 {
            for x in 0..buf.width() as i32 {
                if buf.get(x, y) == Some(INK) {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    fn line_set(w: u32, h: u32, a: PixelCoord, b: PixelCoord) -> BTreeSet<(i32, i32)> {
        let mut buf = canvas(w, h);
        draw_line(&mut buf, a, b, INK);
        inked(&buf)
    }

    fn set_of(points: &[(i32, i32)]) -> BTreeSet<(i32, i32)> {
        points.iter().copied().collect()
    }

    // ── degenerate ────────────────────────────────────────────────────────

    #[test]
    fn single_point_plots_one_pixel() {
        assert_eq!(line_set(4, 4, p(2, 1), p(2, 1)), set_of(&[(2, 1)]));
    }

    #[test]
    fn single_point_off_canvas_plots_nothing() {
        assert!(line_set(4, 4, p(4, 1), p(4, 1)).is_empty());
    }

    // ── axis-aligned and diagonal ─────────────────────────────────────────

    #[test]
    fn horizontal_line() {
        assert_eq!(line_set(5, 3, p(1, 1), p(4, 1)), set_of(&[(1, 1), (2, 1), (3, 1), (4, 1)]));
    }

    #[test]
    fn vertical_line() {
        assert_eq!(line_set(3, 5, p(2, 3), p(2, 0)), set_of(&[(2, 0), (2, 1), (2, 2), (2, 3)]));
    }

    #[test]
    fn main_diagonal() {
        assert_eq!(
            line_set(4, 4, p(0, 0), p(3, 3)),
            set_of(&[(0, 0), (1, 1), (2, 2), (3, 3)])
        );
    }

    #[test]
    fn anti_diagonal() {
        assert_eq!(
            line_set(4, 4, p(0, 3), p(3, 0)),
            set_of(&[(0, 3), (1, 2), (2, 1), (3, 0)])
        );
    }

    // ── slopes ────────────────────────────────────────────────────────────

    #[test]
    fn shallow_minor_steps_at_half() {
        // offsets floor(i/4 + 1/2): 0, 0, 1, 1, 1
        assert_eq!(
            line_set(6, 3, p(0, 0), p(4, 1)),
            set_of(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 1)])
        );
    }

    #[test]
    fn steep_minor_steps_at_half() {
        assert_eq!(
            line_set(3, 6, p(0, 0), p(1, 4)),
            set_of(&[(0, 0), (0, 1), (1, 2), (1, 3), (1, 4)])
        );
    }

    #[test]
    fn all_octants_are_gap_free() {
        let c = p(10, 10);
        let targets = [
            (7, 3), (3, 7), (-3, 7), (-7, 3),
            (-7, -3), (-3, -7), (3, -7), (7, -3),
        ];
        for (tx, ty) in targets {
            let end = p(c.x + tx, c.y + ty);
            let set = line_set(21, 21, c, end);

            let major = tx.abs().max(ty.abs());
            assert_eq!(set.len(), major as usize + 1, "octant ({tx},{ty})");
            assert!(set.contains(&(c.x, c.y)));
            assert!(set.contains(&(end.x, end.y)));

            // One pixel per major-axis position, neighbours 8-connected.
            let mut pts: Vec<_> = set.into_iter().collect();
            if tx.abs() >= ty.abs() {
                pts.sort_by_key(|&(x, _)| x);
            } else {
                pts.sort_by_key(|&(_, y)| y);
            }
            for w in pts.windows(2) {
                assert!((w[0].0 - w[1].0).abs() <= 1 && (w[0].1 - w[1].1).abs() <= 1);
            }
        }
    }

    // ── symmetry ──────────────────────────────────────────────────────────

    #[test]
    fn swapped_endpoints_plot_identical_sets() {
        for x0 in -2..8 {
            for y0 in -2..8 {
                for (x1, y1) in [(0, 0), (5, 2), (2, 5), (7, 7), (-1, 4), (6, -2), (3, 3)] {
                    let a = p(x0, y0);
                    let b = p(x1, y1);
                    assert_eq!(line_set(6, 6, a, b), line_set(6, 6, b, a), "{a:?} {b:?}");
                }
            }
        }
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn clipped_line_matches_unclipped_walk() {
        // Draw once on a large canvas that holds the whole segment, once on a
        // small window; the window must see exactly the overlapping pixels.
        let off = 50;
        for (a, b) in [
            (p(-20, -5), p(30, 12)),
            (p(9, -40), p(-3, 25)),
            (p(-7, 6), p(13, 1)),
            (p(2, 30), p(5, -30)),
        ] {
            let big = line_set(120, 120, p(a.x + off, a.y + off), p(b.x + off, b.y + off));
            let expected: BTreeSet<_> = big
                .into_iter()
                .map(|(x, y)| (x - off, y - off))
                .filter(|&(x, y)| (0..8).contains(&x) && (0..8).contains(&y))
                .collect();
            assert_eq!(line_set(8, 8, a, b), expected, "{a:?} {b:?}");
        }
    }

    #[test]
    fn line_entirely_off_canvas_draws_nothing() {
        assert!(line_set(8, 8, p(-10, -10), p(-1, -30)).is_empty());
        assert!(line_set(8, 8, p(8, 0), p(20, 7)).is_empty());
    }

    #[test]
    fn extreme_coordinates_finish_and_clip() {
        let set = line_set(8, 8, p(i32::MIN, 0), p(i32::MAX, 0));
        assert_eq!(set, (0..8).map(|x| (x, 0)).collect());

        let set = line_set(8, 8, p(i32::MIN, i32::MIN), p(i32::MAX, i32::MAX));
        assert!(set.len() <= 8);
    }

    // ── polyline ──────────────────────────────────────────────────────────

    #[test]
    fn open_polyline_joins_consecutive_points() {
        let mut buf = canvas(5, 5);
        draw_polyline(&mut buf, &[p(0, 0), p(4, 0), p(4, 4)], false, INK);
        let set = inked(&buf);
        assert!(set.contains(&(2, 0)) && set.contains(&(4, 2)));
        assert!(!set.contains(&(2, 2)) && !set.contains(&(0, 2)));
    }

    #[test]
    fn closed_polyline_returns_to_start() {
        let mut buf = canvas(5, 5);
        draw_polyline(&mut buf, &[p(0, 0), p(4, 0), p(4, 4)], true, INK);
        assert!(inked(&buf).contains(&(2, 2)));
    }

    #[test]
    fn single_point_polyline() {
        let mut buf = canvas(3, 3);
        draw_polyline(&mut buf, &[p(1, 2)], true, INK);
        assert_eq!(inked(&buf), set_of(&[(1, 2)]));
    }

    #[test]
    fn empty_polyline_draws_nothing() {
        let mut buf = canvas(3, 3);
        draw_polyline(&mut buf, &[], true, INK);
        assert!(inked(&buf).is_empty());
    }
}
