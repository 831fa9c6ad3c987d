use itertools::Itertools;
use log::error;

use crate::entities::PackedSet;
use crate::geometry::primitives::Circle;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Tolerance used when validating the no-overlap invariant of a finished packing
pub const OVERLAP_TOLERANCE: f64 = 1e-6;

pub fn circle_is_valid(circle: &Circle) -> bool {
    circle.radius.is_finite()
        && circle.radius >= 0.0
        && circle.center.0.is_finite()
        && circle.center.1.is_finite()
}

/// Checks the circle against all placed ones, allowing penetrations of at most [`OVERLAP_TOLERANCE`]
pub fn circle_fits_in_packing(circle: &Circle, packed: &[Circle]) -> bool {
    match packed
        .iter()
        .find(|c| c.overlaps_beyond(circle, OVERLAP_TOLERANCE))
    {
        None => true,
        Some(c) => {
            error!("circle {circle:?} overlaps with placed circle {c:?}");
            false
        }
    }
}

/// Checks every pair of circles, allowing them to penetrate each other by at most [`OVERLAP_TOLERANCE`]
pub fn packing_is_overlap_free(packed: &PackedSet) -> bool {
    packed
        .circles()
        .iter()
        .tuple_combinations()
        .all(|(a, b)| {
            let valid = !a.overlaps_beyond(b, OVERLAP_TOLERANCE);
            if !valid {
                error!("circles {a:?} and {b:?} overlap");
            }
            valid
        })
}

pub fn circles_are_enclosed(enclosing: &Circle, circles: &[Circle], tolerance: f64) -> bool {
    circles
        .iter()
        .all(|c| enclosing.encloses_circle(c, tolerance))
}
