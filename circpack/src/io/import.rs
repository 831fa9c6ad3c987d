use anyhow::{Result, ensure};

use crate::entities::Instance;
use crate::geometry::primitives::Circle;
use crate::io::ext_repr::{ExtCircle, ExtInstance};

/// Converts an [`ExtInstance`] into an [`Instance`], rejecting invalid radii.
pub fn import_instance(ext_instance: &ExtInstance) -> Result<Instance> {
    for (i, r) in ext_instance.radii.iter().enumerate() {
        ensure!(
            r.is_finite() && *r >= 0.0,
            "invalid radius for circle {i} in instance {}: {r}",
            ext_instance.name
        );
    }
    Ok(Instance::new(
        ext_instance.name.clone(),
        ext_instance.radii.clone(),
    ))
}

pub fn import_circle(ext_circle: &ExtCircle) -> Result<Circle> {
    let ExtCircle {
        center: (x, y),
        radius,
    } = *ext_circle;
    ensure!(
        x.is_finite() && y.is_finite(),
        "invalid circle center: ({x}, {y})"
    );
    ensure!(
        radius.is_finite() && radius >= 0.0,
        "invalid circle radius: {radius}"
    );
    Ok(Circle::new(ext_circle.center.into(), radius))
}
