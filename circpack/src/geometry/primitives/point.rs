use crate::geometry::geo_traits::DistanceTo;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub const ORIGIN: Point = Point(0.0, 0.0);

    /// Point at `radius` from `center` in direction `angle` (radians, counter-clockwise from +x)
    pub fn from_polar(center: Point, radius: f64, angle: f64) -> Self {
        Point(
            center.0 + radius * angle.cos(),
            center.1 + radius * angle.sin(),
        )
    }

    /// Distance to the origin
    pub fn norm(&self) -> f64 {
        self.distance_to(&Point::ORIGIN)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point((self.0 + other.0) / 2.0, (self.1 + other.1) / 2.0)
    }
}

impl DistanceTo<Point> for Point {
    fn distance_to(&self, other: &Point) -> f64 {
        self.sq_distance_to(other).sqrt()
    }

    fn sq_distance_to(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}
