use log::trace;

use crate::geometry::primitives::Circle;
use crate::geometry::tangent::tangent_positions;
use crate::util::assertions::OVERLAP_TOLERANCE;

/// Finds the position closest to the origin where a circle with `radius` touches two of the `packed` circles
/// without overlapping any of them.
///
/// Every ordered pair of distinct placed circles is considered, so this is cubic in the number of placed circles.
/// Ties are won by the candidate found first.
/// Candidates penetrating a placed circle by at most [`OVERLAP_TOLERANCE`] are accepted,
/// the computed positions are only tangent up to rounding.
pub fn best_tangent_position(radius: f64, packed: &[Circle]) -> Option<Circle> {
    let mut best: Option<(Circle, f64)> = None;
    let (mut n_candidates, mut n_valid) = (0, 0);

    for (i, a) in packed.iter().enumerate() {
        for (j, b) in packed.iter().enumerate() {
            if i == j {
                continue;
            }
            let Some(positions) = tangent_positions(a, b, radius) else {
                continue;
            };
            for pos in positions {
                n_candidates += 1;
                let candidate = Circle::new(pos, radius);
                if packed
                    .iter()
                    .any(|c| c.overlaps_beyond(&candidate, OVERLAP_TOLERANCE))
                {
                    continue;
                }
                n_valid += 1;
                let dist = pos.norm();
                match best {
                    Some((_, best_dist)) if dist >= best_dist => {}
                    _ => best = Some((candidate, dist)),
                }
            }
        }
    }

    trace!(
        "{n_candidates} tangent candidates for radius {radius:.3}, {n_valid} without overlap"
    );

    best.map(|(circle, _)| circle)
}
