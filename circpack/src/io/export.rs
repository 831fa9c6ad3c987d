use itertools::Itertools;

use crate::entities::{Instance, PackingSnapshot};
use crate::geometry::primitives::Circle;
use crate::io::ext_repr::{ExtCircle, ExtInstance, ExtPlacedCircle, ExtSolution};

pub fn export_instance(instance: &Instance) -> ExtInstance {
    ExtInstance {
        name: instance.name.clone(),
        radii: instance.radii.clone(),
    }
}

pub fn export_circle(circle: &Circle) -> ExtCircle {
    ExtCircle {
        center: circle.center.into(),
        radius: circle.radius,
    }
}

/// Composes an [`ExtSolution`] from a snapshot.
///
/// * `placed_indices` - for every circle in the snapshot, its index in the instance
/// * `skipped` - indices in the instance of the circles that could not be placed
pub fn export_solution(
    snapshot: &PackingSnapshot,
    placed_indices: &[usize],
    skipped: &[usize],
    run_time_ms: u64,
) -> ExtSolution {
    debug_assert_eq!(snapshot.circles.len(), placed_indices.len());

    let circles = snapshot
        .circles
        .iter()
        .zip(placed_indices)
        .map(|(c, &index)| ExtPlacedCircle {
            index,
            circle: export_circle(c),
        })
        .collect_vec();

    ExtSolution {
        circles,
        enclosing_circle: export_circle(&snapshot.enclosing_circle),
        skipped: skipped.to_vec(),
        density: snapshot.density,
        run_time_ms,
    }
}
