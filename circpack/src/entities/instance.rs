use std::f64::consts::PI;

/// A circle packing instance: the radii of the circles to pack, in the order they have to be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub name: String,
    pub radii: Vec<f64>,
}

impl Instance {
    pub fn new(name: String, radii: Vec<f64>) -> Self {
        debug_assert!(radii.iter().all(|r| r.is_finite() && *r >= 0.0));
        Self { name, radii }
    }

    pub fn n_circles(&self) -> usize {
        self.radii.len()
    }

    /// Combined area of all circles
    pub fn total_area(&self) -> f64 {
        self.radii.iter().map(|r| r * r * PI).sum()
    }
}
