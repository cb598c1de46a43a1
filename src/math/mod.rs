pub mod stats;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global numeric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
