use itertools::Itertools;
use ordered_float::OrderedFloat;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::geometry::geo_traits::{DistanceTo, Shape};
use crate::geometry::primitives::{Circle, Point, Rect};

/// Tolerance added to the radius when checking whether a point lies inside a candidate circle
pub const CONTAINMENT_EPS: f64 = 1e-3;

/// Below this (absolute) value of twice the signed triangle area, three points are treated as collinear
pub const COLLINEAR_EPS: f64 = 1e-6;

/// Smallest circle containing all `points`, using Welzl's randomized incremental algorithm
/// (expected linear time).
///
/// The points are shuffled with `rng` before processing, so equal seeds give identical results.
/// Returns a zero-radius circle at the origin if `points` is empty.
pub fn minimal_enclosing_circle(points: &[Point], rng: &mut impl Rng) -> Circle {
    let mut shuffled = points.to_vec();
    shuffled.shuffle(rng);

    let mut circle: Option<Circle> = None;
    for (i, p) in shuffled.iter().enumerate() {
        match circle {
            Some(c) if c.encloses_point(p, CONTAINMENT_EPS) => {}
            _ => circle = Some(mec_through_one(&shuffled[..i], *p)),
        }
    }
    circle.unwrap_or_else(Circle::zero)
}

/// Smallest circle containing `points` with `p` on its boundary
fn mec_through_one(points: &[Point], p: Point) -> Circle {
    let mut circle = Circle::new(p, 0.0);
    for (j, q) in points.iter().enumerate() {
        if !circle.encloses_point(q, CONTAINMENT_EPS) {
            circle = mec_through_two(&points[..j], p, *q);
        }
    }
    circle
}

/// Smallest circle containing `points` with both `p` and `q` on its boundary
fn mec_through_two(points: &[Point], p: Point, q: Point) -> Circle {
    let mut circle = Circle::new(p.midpoint(&q), p.distance_to(&q) / 2.0);
    for r in points {
        if !circle.encloses_point(r, CONTAINMENT_EPS) {
            circle = circumcircle(p, q, *r);
        }
    }
    circle
}

/// The unique circle passing through `a`, `b` and `c`.
///
/// For (nearly) collinear points no such circle exists. Then the circle is centered on the
/// bounding box of the three points, just large enough to contain all of them.
pub fn circumcircle(a: Point, b: Point, c: Point) -> Circle {
    let (ab_x, ab_y) = (b.0 - a.0, b.1 - a.1);
    let (ac_x, ac_y) = (c.0 - a.0, c.1 - a.1);

    let det_ab = ab_x * (a.0 + b.0) + ab_y * (a.1 + b.1);
    let det_ac = ac_x * (a.0 + c.0) + ac_y * (a.1 + c.1);
    let norm = 2.0 * (ab_x * (c.1 - b.1) - ab_y * (c.0 - b.0));

    if norm.abs() < COLLINEAR_EPS {
        let center = Rect::from_points(&[a, b, c]).map_or(a, |bbox| bbox.centroid());
        let radius = [a, b, c]
            .iter()
            .map(|p| OrderedFloat(center.distance_to(p)))
            .max()
            .map_or(0.0, |r| r.0);
        return Circle::new(center, radius);
    }

    let center = Point(
        (ac_y * det_ab - ab_y * det_ac) / norm,
        (ab_x * det_ac - ac_x * det_ab) / norm,
    );
    Circle::new(center, center.distance_to(&a))
}

/// Circle containing all `circles` entirely, centered on the minimal enclosing circle of their centers.
///
/// Not necessarily the smallest such circle when radii differ, but tight in practice.
/// Returns a zero-radius circle at the origin if `circles` is empty.
pub fn tight_enclosing_circle(circles: &[Circle], rng: &mut impl Rng) -> Circle {
    if circles.is_empty() {
        return Circle::zero();
    }
    let centers = circles.iter().map(|c| c.center).collect_vec();
    let mec = minimal_enclosing_circle(&centers, rng);

    Circle::new(mec.center, reach_from(mec.center, circles))
}

/// Circle containing all `circles` entirely, centered on their combined bounding box.
///
/// Cheaper than [`tight_enclosing_circle`] and deterministic, but generally larger.
/// Returns a zero-radius circle at the origin if `circles` is empty.
pub fn bounding_enclosing_circle(circles: &[Circle]) -> Circle {
    let bbox = circles
        .iter()
        .map(|c| c.bbox())
        .reduce(|a, b| Rect::bounding_rect(&a, &b));

    match bbox {
        None => Circle::zero(),
        Some(bbox) => {
            let center = bbox.centroid();
            Circle::new(center, reach_from(center, circles))
        }
    }
}

/// Radius needed for a circle at `center` to contain all `circles`
fn reach_from(center: Point, circles: &[Circle]) -> f64 {
    circles
        .iter()
        .map(|c| OrderedFloat(center.distance_to(&c.center) + c.radius))
        .max()
        .map_or(0.0, |r| r.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    fn random_points(n: usize, seed: u64) -> Vec<Point> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                Point(
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-50.0..150.0),
                )
            })
            .collect()
    }

    fn random_circles(n: usize, seed: u64) -> Vec<Circle> {
        let mut rng = SmallRng::seed_from_u64(seed);
        random_points(n, seed)
            .into_iter()
            .map(|p| Circle::new(p, rng.random_range(0.5..20.0)))
            .collect()
    }

    #[test]
    fn collinear_points_fall_back_to_bbox_center() {
        let c = circumcircle(Point(0.0, 0.0), Point(5.0, 0.0), Point(10.0, 0.0));
        assert_eq!(c.center, Point(5.0, 0.0));
        assert_eq!(c.radius, 5.0);
    }

    #[test]
    fn circumcircle_of_right_triangle() {
        let c = circumcircle(Point(0.0, 0.0), Point(6.0, 0.0), Point(0.0, 8.0));
        assert!(approx_eq!(f64, c.center.0, 3.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, c.center.1, 4.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, c.radius, 5.0, epsilon = 1e-9));
    }

    #[test]
    fn empty_inputs_give_zero_circle() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(minimal_enclosing_circle(&[], &mut rng), Circle::zero());
        assert_eq!(tight_enclosing_circle(&[], &mut rng), Circle::zero());
        assert_eq!(bounding_enclosing_circle(&[]), Circle::zero());
        assert_eq!(Circle::zero().center, Point(0.0, 0.0));
        assert_eq!(Circle::zero().radius, 0.0);
    }

    #[test]
    fn single_point() {
        let mut rng = SmallRng::seed_from_u64(0);
        let c = minimal_enclosing_circle(&[Point(1.0, 2.0)], &mut rng);
        assert_eq!(c, Circle::new(Point(1.0, 2.0), 0.0));
    }

    #[test]
    fn two_points() {
        let mut rng = SmallRng::seed_from_u64(0);
        let c = minimal_enclosing_circle(&[Point(0.0, 0.0), Point(2.0, 0.0)], &mut rng);
        assert!(approx_eq!(f64, c.center.0, 1.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, c.center.1, 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, c.radius, 1.0, epsilon = 1e-9));
    }

    #[test]
    fn square_with_center() {
        let mut rng = SmallRng::seed_from_u64(3);
        let points = [
            Point(0.0, 0.0),
            Point(1.0, 0.0),
            Point(0.5, 0.5),
            Point(1.0, 1.0),
            Point(0.0, 1.0),
        ];
        let c = minimal_enclosing_circle(&points, &mut rng);
        assert!(approx_eq!(f64, c.center.0, 0.5, epsilon = 1e-6));
        assert!(approx_eq!(f64, c.center.1, 0.5, epsilon = 1e-6));
        assert!(approx_eq!(f64, c.radius, f64::sqrt(0.5), epsilon = 1e-6));
    }

    #[test]
    fn obtuse_triangle_uses_longest_side_as_diameter() {
        let mut rng = SmallRng::seed_from_u64(1);
        let points = [Point(-10.0, 0.0), Point(10.0, 0.0), Point(0.0, 2.0)];
        let c = minimal_enclosing_circle(&points, &mut rng);
        assert!(approx_eq!(f64, c.center.0, 0.0, epsilon = 1e-6));
        assert!(approx_eq!(f64, c.center.1, 0.0, epsilon = 1e-6));
        assert!(approx_eq!(f64, c.radius, 10.0, epsilon = 1e-6));
    }

    #[test_case(10, 0; "10 points")]
    #[test_case(100, 1; "100 points")]
    #[test_case(1000, 2; "1000 points")]
    fn mec_contains_all_points(n: usize, seed: u64) {
        let points = random_points(n, seed);
        let mut rng = SmallRng::seed_from_u64(seed);
        let c = minimal_enclosing_circle(&points, &mut rng);
        for p in &points {
            assert!(c.encloses_point(p, 10.0 * CONTAINMENT_EPS), "{p:?} not in {c:?}");
        }
        //at least two points lie on the boundary
        let n_on_boundary = points
            .iter()
            .filter(|p| approx_eq!(f64, c.center.distance_to(*p), c.radius, epsilon = 1e-2))
            .count();
        assert!(n_on_boundary >= 2);
    }

    #[test]
    fn mec_is_reproducible_with_same_seed() {
        let points = random_points(250, 42);
        let c1 = minimal_enclosing_circle(&points, &mut SmallRng::seed_from_u64(7));
        let c2 = minimal_enclosing_circle(&points, &mut SmallRng::seed_from_u64(7));
        assert_eq!(c1.center.0.to_bits(), c2.center.0.to_bits());
        assert_eq!(c1.center.1.to_bits(), c2.center.1.to_bits());
        assert_eq!(c1.radius.to_bits(), c2.radius.to_bits());
    }

    #[test]
    fn mec_independent_of_shuffle() {
        let points = random_points(300, 5);
        let c1 = minimal_enclosing_circle(&points, &mut SmallRng::seed_from_u64(1));
        let c2 = minimal_enclosing_circle(&points, &mut SmallRng::seed_from_u64(2));
        assert!(approx_eq!(f64, c1.radius, c2.radius, epsilon = 1e-2));
    }

    #[test_case(1, 10; "single circle")]
    #[test_case(25, 11; "25 circles")]
    #[test_case(400, 12; "400 circles")]
    fn enclosing_circles_contain_all_circles(n: usize, seed: u64) {
        let circles = random_circles(n, seed);
        let mut rng = SmallRng::seed_from_u64(seed);
        let tight = tight_enclosing_circle(&circles, &mut rng);
        let bounding = bounding_enclosing_circle(&circles);
        for c in &circles {
            assert!(tight.encloses_circle(c, 1e-6));
            assert!(bounding.encloses_circle(c, 1e-6));
        }
    }

    #[test]
    fn single_circle_is_its_own_enclosing_circle() {
        let circle = Circle::new(Point(3.0, -4.0), 7.5);
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(tight_enclosing_circle(&[circle], &mut rng), circle);
        assert_eq!(bounding_enclosing_circle(&[circle]), circle);
    }

    #[test]
    fn bounding_circle_of_two_circles() {
        let circles = [
            Circle::new(Point(-10.0, 0.0), 5.0),
            Circle::new(Point(10.0, 0.0), 5.0),
        ];
        let c = bounding_enclosing_circle(&circles);
        assert_eq!(c.center, Point(0.0, 0.0));
        assert_eq!(c.radius, 15.0);
    }
}
