use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::{Circle, Point};

/// Centers closer than this are considered coincident, no tangent positions exist between them
pub const COINCIDENT_CENTERS_EPS: f64 = 1e-5;

/// Computes the centers at which a circle of `radius` touches both `a` and `b` from the outside,
/// i.e. lies at distance `a.radius + radius` from `a.center` and `b.radius + radius` from `b.center`.
///
/// Returns `None` if `a` and `b` share (almost) the same center or if no such position exists.
/// Otherwise both solutions are returned, mirrored around the line from `a` to `b`.
/// When the new circle fits exactly in line with `a` and `b`, the two solutions coincide.
pub fn tangent_positions(a: &Circle, b: &Circle, radius: f64) -> Option<[Point; 2]> {
    let r1 = a.radius + radius;
    let r2 = b.radius + radius;

    let (dx, dy) = (b.center.0 - a.center.0, b.center.1 - a.center.1);
    let d = a.center.distance_to(&b.center);

    if d < COINCIDENT_CENTERS_EPS {
        return None;
    }

    //law of cosines in the triangle formed by the two centers and the new center
    let cos_theta = (r1 * r1 + d * d - r2 * r2) / (2.0 * r1 * d);
    if !(-1.0..=1.0).contains(&cos_theta) {
        return None;
    }

    let theta = cos_theta.acos();
    let phi = dy.atan2(dx);

    Some([
        Point::from_polar(a.center, r1, phi + theta),
        Point::from_polar(a.center, r1, phi - theta),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn two_positions_symmetric_around_x_axis() {
        let a = Circle::new(Point(0.0, 0.0), 5.0);
        let b = Circle::new(Point(10.0, 0.0), 5.0);

        let [p1, p2] = tangent_positions(&a, &b, 3.0).unwrap();

        for p in [p1, p2] {
            assert!(approx_eq!(f64, p.distance_to(&a.center), 8.0, epsilon = 1e-4));
            assert!(approx_eq!(f64, p.distance_to(&b.center), 8.0, epsilon = 1e-4));
        }
        assert!(approx_eq!(f64, p1.0, p2.0, epsilon = 1e-4));
        assert!(approx_eq!(f64, p1.1, -p2.1, epsilon = 1e-4));
        assert!(approx_eq!(f64, p1.0, 5.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, p1.1.abs(), 39.0_f64.sqrt(), epsilon = 1e-9));
    }

    #[test]
    fn too_far_apart() {
        let a = Circle::new(Point(0.0, 0.0), 5.0);
        let b = Circle::new(Point(20.0, 0.0), 5.0);
        //gap of 10 between the circles cannot be bridged by a diameter of 6
        assert!(tangent_positions(&a, &b, 3.0).is_none());
    }

    #[test]
    fn coincident_centers() {
        let a = Circle::new(Point(1.0, 1.0), 5.0);
        let b = Circle::new(Point(1.0, 1.0 + 1e-6), 2.0);
        assert!(tangent_positions(&a, &b, 3.0).is_none());
    }

    #[test]
    fn nested_circle_has_no_positions() {
        //b lies so deep inside a's reach that no point is at the required distance from both
        let a = Circle::new(Point(0.0, 0.0), 20.0);
        let b = Circle::new(Point(1.0, 0.0), 1.0);
        assert!(tangent_positions(&a, &b, 1.0).is_none());
    }

    #[test]
    fn exact_fit_gives_coinciding_positions() {
        let a = Circle::new(Point(0.0, 0.0), 2.0);
        let b = Circle::new(Point(10.0, 0.0), 2.0);
        let [p1, p2] = tangent_positions(&a, &b, 3.0).unwrap();
        assert!(approx_eq!(f64, p1.0, 5.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, p1.1, 0.0, epsilon = 1e-9));
        assert_eq!(p1, p2);
    }

    #[test]
    fn positions_follow_direction_of_pair() {
        let a = Circle::new(Point(3.0, -2.0), 4.0);
        let b = Circle::new(Point(-5.0, 7.0), 6.0);
        let [p1, p2] = tangent_positions(&a, &b, 2.5).unwrap();
        for p in [p1, p2] {
            let touching = Circle::new(p, 2.5);
            assert!(approx_eq!(f64, touching.center.distance_to(&a.center), 6.5, epsilon = 1e-9));
            assert!(approx_eq!(f64, touching.center.distance_to(&b.center), 8.5, epsilon = 1e-9));
        }
    }
}
