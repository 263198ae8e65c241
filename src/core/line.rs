//! Integer Bresenham line traversal.
//!
//! The rasterizer is stateless: it reports every pixel on the segment to a
//! `plot` callback and leaves clipping to whoever owns the pixels.

/// Stepping regime for one octant pair of the general case.
///
/// The walk always advances the primary axis by `primary_step` and, when the
/// decision variable says so, the secondary axis by `secondary_step`. For
/// steep lines the roles of x and y are swapped before plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Octant {
    primary_step: i64,
    secondary_step: i64,
    swap_xy: bool,
}

/// Incremental-error state for a single walk. All deltas are pre-doubled.
#[derive(Debug, Clone, Copy)]
struct Walk {
    /// Added to F while staying on the same secondary coordinate
    minor2: i64,
    /// Added to F when the secondary coordinate advances
    correction: i64,
    primary: i64,
    secondary: i64,
    limit: i64,
}

impl Walk {
    fn run(mut self, octant: Octant, mut decision: i64, plot: &mut impl FnMut(i32, i32)) {
        // Both coordinates stay between the two i32 endpoints, so narrowing is lossless.
        while (self.limit - self.primary) * octant.primary_step >= 0 {
            if octant.swap_xy {
                plot(self.secondary as i32, self.primary as i32);
            } else {
                plot(self.primary as i32, self.secondary as i32);
            }

            if decision <= 0 {
                decision += self.minor2;
            } else {
                self.secondary += octant.secondary_step;
                decision += self.correction;
            }

            self.primary += octant.primary_step;
        }
    }
}

/// Visit every pixel of the segment `p1`-`p2`, both endpoints included, each
/// exactly once.
///
/// Drawing `p1 -> p2` visits the same pixel set as `p2 -> p1`. On a tie
/// (decision variable exactly zero) the walk stays on the current minor-axis
/// value. A zero-length segment plots its single pixel.
pub fn rasterize_line(p1: (i32, i32), p2: (i32, i32), mut plot: impl FnMut(i32, i32)) {
    // Normalize to left-to-right so only one x direction exists.
    let ((p1x, p1y), (p2x, p2y)) = if p1.0 > p2.0 { (p2, p1) } else { (p1, p2) };

    if p1x == p2x {
        for y in p1y.min(p2y)..=p1y.max(p2y) {
            plot(p1x, y);
        }
        return;
    }

    if p1y == p2y {
        for x in p1x..=p2x {
            plot(x, p1y);
        }
        return;
    }

    // i64 keeps the doubled deltas exact for any pair of i32 endpoints.
    let (p1x, p1y, p2x, p2y) = (p1x as i64, p1y as i64, p2x as i64, p2y as i64);
    let dx = p2x - p1x;
    let dy = p2y - p1y;
    let dx2 = dx * 2;
    let dy2 = dy * 2;

    if dy >= 0 {
        if dy <= dx {
            // 0 <= m <= 1
            let octant = Octant { primary_step: 1, secondary_step: 1, swap_xy: false };
            let walk = Walk { minor2: dy2, correction: dy2 - dx2, primary: p1x, secondary: p1y, limit: p2x };
            walk.run(octant, dy2 - dx, &mut plot);
        } else {
            // m > 1: mirror about y = x
            let octant = Octant { primary_step: 1, secondary_step: 1, swap_xy: true };
            let walk = Walk { minor2: dx2, correction: dx2 - dy2, primary: p1y, secondary: p1x, limit: p2y };
            walk.run(octant, dx2 - dy, &mut plot);
        }
    } else if dx >= -dy {
        // -1 <= m < 0: mirror about the x axis
        let octant = Octant { primary_step: 1, secondary_step: -1, swap_xy: false };
        let walk = Walk { minor2: -dy2, correction: -dy2 - dx2, primary: p1x, secondary: p1y, limit: p2x };
        walk.run(octant, -dy2 - dx, &mut plot);
    } else {
        // m < -1: mirror about the x axis and about y = x, walking y downwards
        let octant = Octant { primary_step: -1, secondary_step: 1, swap_xy: true };
        let walk = Walk { minor2: dx2, correction: dx2 + dy2, primary: p1y, secondary: p1x, limit: p2y };
        walk.run(octant, dx2 + dy, &mut plot);
    }
}

/// Fill `buffer` with a repeating 4-byte `pattern`.
///
/// Seeds one pattern unit, then doubles the filled prefix by copying it onto
/// itself, finishing with a single tail copy. The number of copies grows with
/// the logarithm of the buffer size. A trailing partial unit receives the
/// matching prefix of the pattern; buffers shorter than one unit are untouched.
pub fn fill_pattern(buffer: &mut [u8], pattern: [u8; 4]) {
    let len = buffer.len();
    if len < pattern.len() {
        return;
    }

    buffer[..pattern.len()].copy_from_slice(&pattern);
    let mut filled = pattern.len();

    while filled * 2 <= len {
        buffer.copy_within(0..filled, filled);
        filled *= 2;
    }

    let tail = len - filled;
    // The tail is always shorter than the filled, pattern-aligned prefix.
    debug_assert!(tail < filled && filled % pattern.len() == 0);
    buffer.copy_within(0..tail, filled);
}
