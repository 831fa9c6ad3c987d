use std::time::{Duration, Instant};

use circpack::entities::{Instance, PackedSet, PackingSnapshot};
use circpack::geometry::primitives::{Circle, Point};
use circpack::io::export::export_solution;
use circpack::io::ext_repr::ExtSolution;
use circpack::placement::PlacementKind;
use log::{debug, info, warn};
use rand::prelude::SmallRng;
use thousands::Separable;

use crate::config::TSFConfig;
use crate::time::as_millis_f64;

/// Tangent-Spiral-Fill (TSF) packer: places the circles of an instance one by one, in order,
/// each one as close to the origin as possible.
pub struct TSFPacker {
    pub instance: Instance,
    pub packed: PackedSet,
    pub config: TSFConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

/// Outcome of a [`TSFPacker`] run
#[derive(Clone, Debug)]
pub struct TSFSolution {
    pub snapshot: PackingSnapshot,
    /// Instance index of every circle in the snapshot
    pub placed_indices: Vec<usize>,
    /// Instance indices of the circles for which no position was found
    pub skipped: Vec<usize>,
    pub elapsed: Duration,
}

impl TSFSolution {
    pub fn export(&self) -> ExtSolution {
        export_solution(
            &self.snapshot,
            &self.placed_indices,
            &self.skipped,
            self.elapsed.as_millis() as u64,
        )
    }
}

impl TSFPacker {
    pub fn new(instance: Instance, config: TSFConfig, rng: SmallRng) -> Self {
        Self {
            instance,
            packed: PackedSet::new(),
            config,
            rng,
        }
    }

    pub fn solve(&mut self) -> TSFSolution {
        let start = Instant::now();
        let n_circles = self.instance.n_circles();

        let mut placed_indices = Vec::with_capacity(n_circles);
        let mut skipped = vec![];
        let mut counts = [0usize; 2];

        info!(
            "[TSF] packing {} circles with a combined area of {:.3}",
            n_circles.separate_with_commas(),
            self.instance.total_area()
        );

        for (idx, &radius) in self.instance.radii.iter().enumerate() {
            let placement_start = Instant::now();

            if self.config.anchor_first && self.packed.is_empty() {
                let circle = Circle::new(Point::ORIGIN, radius);
                self.packed.place(circle);
                placed_indices.push(idx);
                info!("[TSF] anchored circle {}/{} (r: {:.3}) at the origin", idx + 1, n_circles, radius);
                continue;
            }

            match self.packed.place_next(radius, &self.config.placement) {
                Ok(placement) => {
                    placed_indices.push(idx);
                    let kind = match placement.kind {
                        PlacementKind::Tangent => {
                            counts[0] += 1;
                            "tangent"
                        }
                        PlacementKind::Spiral => {
                            counts[1] += 1;
                            "spiral"
                        }
                    };
                    let Point(x, y) = placement.circle.center;
                    info!(
                        "[TSF] placed circle {}/{} (r: {:.3}) at ({:.3}, {:.3}) via {} in {:.3}ms",
                        idx + 1,
                        n_circles,
                        radius,
                        x,
                        y,
                        kind,
                        as_millis_f64(placement_start.elapsed())
                    );
                }
                Err(e) => {
                    warn!("[TSF] skipping circle {}/{}: {e}", idx + 1, n_circles);
                    skipped.push(idx);
                }
            }
        }

        let snapshot = self.packed.save(self.config.enclosing, &mut self.rng);
        let elapsed = start.elapsed();

        debug!(
            "[TSF] {} tangent placements, {} spiral placements",
            counts[0], counts[1]
        );
        info!(
            "[TSF] packing finished in {:.3}ms ({} circles placed, {} skipped)",
            as_millis_f64(elapsed),
            placed_indices.len().separate_with_commas(),
            skipped.len().separate_with_commas()
        );
        info!(
            "[TSF] enclosing circle with radius {:.3} at ({:.3}, {:.3}), density of {:.3}%",
            snapshot.enclosing_circle.radius,
            snapshot.enclosing_circle.center.0,
            snapshot.enclosing_circle.center.1,
            snapshot.density * 100.0
        );

        TSFSolution {
            snapshot,
            placed_indices,
            skipped,
            elapsed,
        }
    }
}
