use std::f64::consts::PI;

use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape};
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;

/// Geometric primitive representing a circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );

        Self { center, radius }
    }

    /// Circle with radius 0 at the origin, the result for enclosing an empty set
    pub fn zero() -> Self {
        Self::new(Point::ORIGIN, 0.0)
    }

    /// Same radius, different center
    pub fn moved_to(&self, center: Point) -> Self {
        Circle::new(center, self.radius)
    }

    /// Two circles overlap if the distance between their centers is strictly smaller than the sum of their radii.
    /// Touching circles do not overlap.
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.collides_with(other)
    }

    /// Like [`Circle::overlaps`], but ignores penetrations of at most `tolerance`.
    pub fn overlaps_beyond(&self, other: &Circle, tolerance: f64) -> bool {
        let r_sum = f64::max(self.radius + other.radius - tolerance, 0.0);
        self.center.sq_distance_to(&other.center) < r_sum * r_sum
    }

    /// Whether `point` lies inside the circle, with `tolerance` added to the radius.
    pub fn encloses_point(&self, point: &Point, tolerance: f64) -> bool {
        self.center.distance_to(point) <= self.radius + tolerance
    }

    /// Whether `other` lies entirely inside the circle, with `tolerance` added to the radius.
    pub fn encloses_circle(&self, other: &Circle, tolerance: f64) -> bool {
        self.center.distance_to(&other.center) + other.radius <= self.radius + tolerance
    }
}

impl CollidesWith<Circle> for Circle {
    fn collides_with(&self, other: &Circle) -> bool {
        let sq_d = self.center.sq_distance_to(&other.center);
        let r_sum = self.radius + other.radius;

        sq_d < r_sum * r_sum
    }
}

impl DistanceTo<Circle> for Circle {
    fn distance_to(&self, other: &Circle) -> f64 {
        let d = self.center.distance_to(&other.center) - self.radius - other.radius;
        f64::max(d, 0.0)
    }

    fn sq_distance_to(&self, other: &Circle) -> f64 {
        self.distance_to(other).powi(2)
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    fn bbox(&self) -> Rect {
        let (r, Point(x, y)) = (self.radius, self.center);
        Rect::new(x - r, y - r, x + r, y + r)
    }
}
