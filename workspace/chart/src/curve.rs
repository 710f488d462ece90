//! SVG path data for the chart's line series.
//!
//! The historical series is drawn with monotone cubic interpolation along x
//! (Fritsch-Carlson tangents): the curve passes through every sample and
//! never overshoots between two neighbouring samples.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One cubic Bézier segment, starting where the previous one ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

/// Rounds to two decimals and drops the trailing zeros.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// Tangent at `p1` given its neighbours.
fn interior_tangent(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    if h0 == 0.0 || h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.y - p0.y) / h0;
    let s1 = (p2.y - p1.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_finite() { tangent } else { 0.0 }
}

/// Tangent at an end point, from the segment slope and the inner tangent.
fn end_tangent(p0: Point, p1: Point, inner: f64) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        inner
    } else {
        (3.0 * (p1.y - p0.y) / h - inner) / 2.0
    }
}

/// Cubic segments of the monotone curve through `points` (sorted by x).
///
/// Fewer than three points produce no segments; use [`monotone_x_path`],
/// which falls back to straight lines.
pub fn monotone_x_segments(points: &[Point]) -> Vec<CubicSegment> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = end_tangent(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

    points
        .windows(2)
        .zip(tangents.windows(2))
        .map(|(pair, slopes)| {
            let (start, end) = (pair[0], pair[1]);
            let dx = (end.x - start.x) / 3.0;
            CubicSegment {
                control1: Point::new(start.x + dx, start.y + dx * slopes[0]),
                control2: Point::new(end.x - dx, end.y - dx * slopes[1]),
                end,
            }
        })
        .collect()
}

/// Path data of the monotone curve through `points`.
pub fn monotone_x_path(points: &[Point]) -> String {
    if points.len() < 3 {
        return linear_path(points);
    }

    let mut path = move_to(points[0]);
    for segment in monotone_x_segments(points) {
        let _ = write!(
            path,
            "C{},{},{},{},{},{}",
            format_number(segment.control1.x),
            format_number(segment.control1.y),
            format_number(segment.control2.x),
            format_number(segment.control2.y),
            format_number(segment.end.x),
            format_number(segment.end.y),
        );
    }
    path
}

/// Path data of straight segments through `points`.
pub fn linear_path(points: &[Point]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut path = move_to(*first);
    for point in rest {
        let _ = write!(path, "L{},{}", format_number(point.x), format_number(point.y));
    }
    path
}

fn move_to(point: Point) -> String {
    format!("M{},{}", format_number(point.x), format_number(point.y))
}
