/// Smallest circles containing sets of points or circles
pub mod enclosing;
pub mod geo_traits;
pub mod primitives;
/// Positions at which a circle touches two others
pub mod tangent;
