use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::enclosing;
use crate::geometry::primitives::Circle;

///Configuration of the placement search
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct PlacementConfig {
    ///Configuration of the spiral search, used when no tangent position is available
    #[serde(default)]
    pub spiral: SpiralConfig,
}

///Configuration of the outward spiral around the origin
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SpiralConfig {
    ///Increase of the angle (in radians) between two consecutive samples
    pub angle_step: f64,
    ///Increase of the distance to the origin between two consecutive samples
    pub radius_step: f64,
    ///Maximum number of samples before giving up
    pub max_iterations: usize,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            angle_step: 0.1,
            radius_step: 0.1,
            max_iterations: 10_000,
        }
    }
}

/// Method used to compute a circle enclosing a packing
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EnclosingStrategy {
    /// Minimal enclosing circle of the centers, grown to contain every circle
    #[default]
    Tight,
    /// Circle around the center of the bounding box of all circles
    BoundingBox,
}

impl EnclosingStrategy {
    /// Computes a circle containing all `circles`, zero-radius at the origin if there are none.
    /// Only [`EnclosingStrategy::Tight`] draws from `rng`.
    pub fn enclose(&self, circles: &[Circle], rng: &mut impl Rng) -> Circle {
        match self {
            EnclosingStrategy::Tight => enclosing::tight_enclosing_circle(circles, rng),
            EnclosingStrategy::BoundingBox => enclosing::bounding_enclosing_circle(circles),
        }
    }
}
