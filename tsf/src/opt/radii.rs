use anyhow::{Result, ensure};
use circpack::entities::Instance;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::config::RadiusGenerator;

/// Draws `n_circles` integer radii uniformly from `[min_radius, max_radius)`
pub fn generate_instance(generator: &RadiusGenerator, rng: &mut impl Rng) -> Result<Instance> {
    let RadiusGenerator {
        n_circles,
        min_radius,
        max_radius,
    } = *generator;
    ensure!(
        min_radius < max_radius,
        "invalid radius range: [{min_radius}, {max_radius})"
    );
    let distr = Uniform::new(min_radius, max_radius)?;
    let radii = distr
        .sample_iter(rng)
        .take(n_circles)
        .map(f64::from)
        .collect();

    let name = format!("random_{n_circles}_{min_radius}_{max_radius}");
    Ok(Instance::new(name, radii))
}
