use crate::canvas::Surface;
use crate::config::Color;
use crate::hand::Point;
use thiserror::Error;

/// The polygon produced no fillable pixels, e.g. a zero-length or
/// zero-thickness hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("polygon has no fillable scan-line spans")]
pub struct DegeneratePolygon;

/// A run of pixels on one row, `x_start` inclusive and `x_end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

impl Span {
    pub fn len(&self) -> usize {
        (self.x_end - self.x_start).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// X where the edge `a -> b` crosses the horizontal line at `y`. An edge
/// counts only if one endpoint is at or above `y` and the other strictly
/// below, so a shared vertex is crossed once and horizontal edges never.
fn edge_crossing(a: Point, b: Point, y: f64) -> Option<f64> {
    if (a.y <= y) == (b.y <= y) {
        return None;
    }
    Some(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y))
}

fn edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

fn bounds(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    let first = points.first()?;
    Some(points.iter().fold(
        (first.x, first.x, first.y, first.y),
        |(min_x, max_x, min_y, max_y), p| {
            (min_x.min(p.x), max_x.max(p.x), min_y.min(p.y), max_y.max(p.y))
        },
    ))
}

/// First pixel whose centre lies at or right of `x`.
fn pixel_edge(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

/// Even-odd scan-line conversion of a polygon into pixel runs.
///
/// Rows whose crossing count is odd (only possible for self-intersecting or
/// malformed input) contribute nothing.
pub fn scanline_spans(points: &[Point]) -> Vec<Span> {
    let mut spans = Vec::new();
    let Some((_, _, min_y, max_y)) = bounds(points) else {
        return spans;
    };
    if points.len() < 3 {
        return spans;
    }

    let mut crossings = Vec::with_capacity(points.len());
    for y in min_y.floor() as i32..=max_y.ceil() as i32 {
        crossings.clear();
        crossings.extend(edges(points).filter_map(|(a, b)| edge_crossing(a, b, y as f64)));
        if crossings.len() % 2 != 0 {
            continue;
        }
        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            let span = Span {
                y,
                x_start: pixel_edge(pair[0]),
                x_end: pixel_edge(pair[1]),
            };
            if !span.is_empty() {
                spans.push(span);
            }
        }
    }
    spans
}

/// Scan-line fills the polygon, returning the number of pixels covered,
/// including any that fall outside the surface.
pub fn fill_polygon<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    color: Color,
) -> Result<usize, DegeneratePolygon> {
    let spans = scanline_spans(points);
    if spans.is_empty() {
        return Err(DegeneratePolygon);
    }
    let mut filled = 0;
    for span in &spans {
        for x in span.x_start..span.x_end {
            surface.draw_point(x, span.y, color);
        }
        filled += span.len();
    }
    Ok(filled)
}

/// Even-odd membership of a point, using the same crossing rule as the
/// scan-line fill so both strategies agree pixel for pixel.
pub fn contains(points: &[Point], p: Point) -> bool {
    edges(points)
        .filter_map(|(a, b)| edge_crossing(a, b, p.y))
        .filter(|&x| x >= p.x)
        .count()
        % 2
        == 1
}

/// Fills the polygon by testing every pixel of its bounding box. The count
/// matches [`fill_polygon`] for the same points.
pub fn fill_polygon_pointillist<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    color: Color,
) -> Result<usize, DegeneratePolygon> {
    let (min_x, max_x, min_y, max_y) = bounds(points).ok_or(DegeneratePolygon)?;
    let mut filled = 0;
    for y in min_y.floor() as i32..=max_y.ceil() as i32 {
        for x in min_x.floor() as i32..=max_x.ceil() as i32 {
            // sample at the horizontal pixel centre on the scan line
            if contains(points, Point::new(x as f64 + 0.5, y as f64)) {
                surface.draw_point(x, y, color);
                filled += 1;
            }
        }
    }
    if filled == 0 {
        return Err(DegeneratePolygon);
    }
    Ok(filled)
}
