use rand::Rng;

use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Circle;
use crate::placement::{self, NoValidPosition, Placement};
use crate::util::assertions;
use crate::util::{EnclosingStrategy, PlacementConfig};

/// The circles placed so far, in the order they were placed.
/// Circles can only be added, never moved or removed.
#[derive(Clone, Debug, Default)]
pub struct PackedSet {
    circles: Vec<Circle>,
}

impl PackedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a circle at a position chosen by the caller.
    /// The circle is expected not to overlap any of the placed circles by more than
    /// [`OVERLAP_TOLERANCE`](assertions::OVERLAP_TOLERANCE).
    pub fn place(&mut self, circle: Circle) {
        debug_assert!(assertions::circle_is_valid(&circle));
        debug_assert!(assertions::circle_fits_in_packing(&circle, &self.circles));
        self.circles.push(circle);
    }

    /// Searches a position for a new circle with `radius` and adds it on success.
    /// On failure the set is left untouched.
    pub fn place_next(
        &mut self,
        radius: f64,
        config: &PlacementConfig,
    ) -> Result<Placement, NoValidPosition> {
        let placement = placement::place_next_with(radius, &self.circles, config)?;
        self.circles.push(placement.circle);
        Ok(placement)
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// True if no circles are placed
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Combined area of all placed circles
    pub fn total_area(&self) -> f64 {
        self.circles.iter().map(|c| c.area()).sum()
    }

    /// Fraction of the `enclosing` circle's area covered by the placed circles
    pub fn density(&self, enclosing: &Circle) -> f64 {
        let enclosing_area = enclosing.area();
        if enclosing_area > 0.0 {
            self.total_area() / enclosing_area
        } else {
            0.0
        }
    }

    /// Captures the current state together with a circle enclosing it.
    pub fn save(&self, strategy: EnclosingStrategy, rng: &mut impl Rng) -> PackingSnapshot {
        let enclosing_circle = strategy.enclose(&self.circles, rng);
        debug_assert!(assertions::circles_are_enclosed(
            &enclosing_circle,
            &self.circles,
            1e-6
        ));
        PackingSnapshot {
            circles: self.circles.clone(),
            density: self.density(&enclosing_circle),
            enclosing_circle,
        }
    }
}

/// Immutable representation of a [`PackedSet`] at a certain point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct PackingSnapshot {
    pub circles: Vec<Circle>,
    pub enclosing_circle: Circle,
    /// Fraction of the enclosing circle covered by circles
    pub density: f64,
}
