use crate::canvas::Surface;
use crate::config::Color;
use crate::hand::Point;

/// Integer Bresenham line, both endpoints included.
pub fn integer_line(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let (mut x, mut y) = (x0, y0);
    let mut err = dx + dy;
    loop {
        plot(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Wu anti-aliased line between floating-point endpoints.
///
/// Steps one pixel at a time along the axis with the larger extent. At each
/// step the two pixels bracketing the exact cross-axis position share the
/// coverage: `1 - frac` for the lower one and `frac` for the upper one, so
/// every step sums to full coverage. `plot` receives `(x, y, coverage)` in
/// surface coordinates; zero-coverage pixels are not reported.
pub fn wu_line(from: Point, to: Point, mut plot: impl FnMut(i32, i32, f32)) {
    let (mut x0, mut y0, mut x1, mut y1) = (from.x, from.y, to.x, to.y);
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let gradient = if dx == 0.0 { 0.0 } else { (y1 - y0) / dx };

    let start = x0.round() as i32;
    let end = x1.round() as i32;
    for main in start..=end {
        let cross = y0 + gradient * (main as f64 - x0);
        let lower = cross.floor();
        let frac = (cross - lower) as f32;
        let lower = lower as i32;
        for (cross_px, coverage) in [(lower, 1.0 - frac), (lower + 1, frac)] {
            if coverage <= 0.0 {
                continue;
            }
            if steep {
                plot(cross_px, main, coverage);
            } else {
                plot(main, cross_px, coverage);
            }
        }
    }
}

pub fn draw_line_aa<S: Surface + ?Sized>(surface: &mut S, from: Point, to: Point, color: Color) {
    wu_line(from, to, |x, y, coverage| {
        surface.blend_point(x, y, color, coverage)
    });
}

/// Approximates a thick anti-aliased stroke with `thickness` parallel Wu
/// lines spaced one pixel apart and centred on the segment.
pub fn draw_thick_line_aa<S: Surface + ?Sized>(
    surface: &mut S,
    from: Point,
    to: Point,
    thickness: u32,
    color: Color,
) {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len = (dx * dx + dy * dy).sqrt();
    // a zero-length segment has no direction, offsets collapse onto it
    let (px, py) = if len > 0.0 { (-dy / len, dx / len) } else { (0.0, 0.0) };
    let centre = (thickness as f64 - 1.0) / 2.0;
    for k in 0..thickness {
        let offset = k as f64 - centre;
        let shift = Point::new(px * offset, py * offset);
        draw_line_aa(surface, from + shift, to + shift, color);
    }
}
