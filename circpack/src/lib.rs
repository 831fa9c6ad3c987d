#![doc = document_features::document_features!()]
//! Incremental circle packing in the plane: tangent-based greedy placement with a spiral
//! fallback, together with minimal enclosing circles for bounding the resulting arrangement.

/// Entities to model a packing: the set of placed circles and snapshots of it
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing instances into and exporting packings out of this library
pub mod io;

/// Searching a position for the next circle in a packing
pub mod placement;

/// Helper functions which do not belong to any specific module
pub mod util;
