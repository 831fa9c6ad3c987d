use crate::geometry::primitives::{Circle, Point};
use crate::util::SpiralConfig;

/// Iterates over the points of an outward spiral around the origin.
/// Starts at angle 0 at distance `start_radius`; every step increases both angle and distance.
/// Ends after `max_iterations` points.
#[derive(Debug, Clone)]
pub struct Spiral {
    start_radius: f64,
    config: SpiralConfig,
    i: usize,
}

impl Spiral {
    pub fn new(start_radius: f64, config: SpiralConfig) -> Self {
        Self {
            start_radius,
            config,
            i: 0,
        }
    }
}

impl Iterator for Spiral {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.config.max_iterations {
            return None;
        }
        //derived from the index, not accumulated
        let step = self.i as f64;
        let angle = step * self.config.angle_step;
        let radius = self.start_radius + step * self.config.radius_step;
        self.i += 1;

        Some(Point::from_polar(Point::ORIGIN, radius, angle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.config.max_iterations.saturating_sub(self.i);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Spiral {}

/// Walks the spiral starting at distance `radius` from the origin and returns the first circle
/// with `radius` that does not overlap any of the `packed` circles.
pub fn spiral_search(radius: f64, packed: &[Circle], config: &SpiralConfig) -> Option<Circle> {
    let circle = Circle::new(Point::ORIGIN, radius);
    Spiral::new(radius, *config)
        .map(|pos| circle.moved_to(pos))
        .find(|candidate| packed.iter().all(|c| !c.overlaps(candidate)))
}
