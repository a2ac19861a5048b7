pub mod distance_2d;
pub mod stats;

/// 2D point type (map-plane coordinates).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D vector type (used for bedding-plane normals).
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
