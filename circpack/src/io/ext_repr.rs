use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Radii of the circles to pack, in order of placement
    pub radii: Vec<f64>,
}

/// External representation of a [`Circle`](crate::geometry::primitives::Circle).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtCircle {
    pub center: (f64, f64),
    pub radius: f64,
}

/// A circle of the instance, at the position where it was placed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlacedCircle {
    /// Index of the circle in [`ExtInstance::radii`]
    pub index: usize,
    #[serde(flatten)]
    pub circle: ExtCircle,
}

/// External representation of a finished packing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    /// All placed circles, in order of placement
    pub circles: Vec<ExtPlacedCircle>,
    /// Circle containing all placed circles
    pub enclosing_circle: ExtCircle,
    /// Indices of the circles for which no position was found
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<usize>,
    /// Fraction of the enclosing circle covered by circles
    pub density: f64,
    /// Time it took to construct the packing, in milliseconds
    pub run_time_ms: u64,
}
