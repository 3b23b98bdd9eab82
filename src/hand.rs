use crate::config::Color;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, f: f64) -> Point {
        Point::new(self.x * f, self.y * f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];
}

/// One hand for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSpec {
    /// Degrees, dial offset already applied
    pub angle: f64,
    pub length: f64,
    pub thickness: u32,
    pub color: Color,
}

impl HandSpec {
    pub fn direction(&self) -> Point {
        let radians = self.angle.to_radians();
        Point::new(radians.cos(), radians.sin())
    }

    pub fn tip(&self, origin: Point) -> Point {
        origin + self.direction() * self.length
    }

    /// The hand's silhouette as a thin quadrilateral around the segment from
    /// `origin` to the tip.
    pub fn polygon(&self, origin: Point) -> Polygon {
        let dir = self.direction();
        let perp = Point::new(-dir.y, dir.x) * (self.thickness as f64 / 2.0);
        let tip = origin + dir * self.length;
        Polygon::new([origin + perp, origin - perp, tip - perp, tip + perp])
    }
}

/// Hand silhouette, corners in winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon {
    points: [Point; 4],
}

impl Polygon {
    pub fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
