use std::fmt::{Display, Formatter};

use log::{debug, warn};

use crate::geometry::primitives::Circle;
use crate::util::PlacementConfig;
use crate::util::assertions;

mod spiral;
mod tangent_search;

#[doc(inline)]
pub use spiral::Spiral;
#[doc(inline)]
pub use spiral::spiral_search;
#[doc(inline)]
pub use tangent_search::best_tangent_position;

/// A position found for a new circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub circle: Circle,
    pub kind: PlacementKind,
}

/// Which phase of the search produced a [`Placement`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementKind {
    /// Touching two already placed circles, as close as possible to the origin
    Tangent,
    /// First free position on the outward spiral around the origin
    Spiral,
}

/// No position could be found for a circle, neither tangent to a pair of placed circles nor on the spiral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoValidPosition {
    pub radius: f64,
    pub spiral_iterations: usize,
}

impl Display for NoValidPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no valid position for circle with radius {:.3} (no tangent position, spiral exhausted after {} iterations)",
            self.radius, self.spiral_iterations
        )
    }
}

impl std::error::Error for NoValidPosition {}

/// Searches a position for a new circle with `radius` among the `packed` circles,
/// using the default [`PlacementConfig`].
pub fn place_next(radius: f64, packed: &[Circle]) -> Result<Placement, NoValidPosition> {
    place_next_with(radius, packed, &PlacementConfig::default())
}

/// Searches a position for a new circle with `radius` among the `packed` circles.
///
/// First, all positions touching two placed circles are considered and the one closest to the origin,
/// not overlapping any placed circle, is chosen.
/// If none exists, the first free position along an outward spiral around the origin is taken instead.
/// The `packed` circles themselves are never modified.
pub fn place_next_with(
    radius: f64,
    packed: &[Circle],
    config: &PlacementConfig,
) -> Result<Placement, NoValidPosition> {
    debug_assert!(radius.is_finite() && radius >= 0.0, "invalid radius: {radius}");

    let placement = match best_tangent_position(radius, packed) {
        Some(circle) => Some(Placement {
            circle,
            kind: PlacementKind::Tangent,
        }),
        None => {
            debug!("no tangent position for radius {radius:.3}, falling back to spiral search");
            spiral_search(radius, packed, &config.spiral).map(|circle| Placement {
                circle,
                kind: PlacementKind::Spiral,
            })
        }
    };

    match placement {
        Some(placement) => {
            debug_assert!(assertions::circle_is_valid(&placement.circle));
            debug_assert!(assertions::circle_fits_in_packing(&placement.circle, packed));
            Ok(placement)
        }
        None => {
            warn!("no valid position found for circle with radius {radius:.3}");
            Err(NoValidPosition {
                radius,
                spiral_iterations: config.spiral.max_iterations,
            })
        }
    }
}
