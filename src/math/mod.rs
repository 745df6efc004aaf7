pub mod fillet_2d;
pub mod intersect_2d;
pub mod vector;

pub use vector::{mm, to_mm, VectorExt, IU_PER_MM};

/// 2D vector in integer board units (nanometres).
///
/// Points and displacements share this type; board documents address
/// everything relative to the sheet origin.
pub type Vector2 = nalgebra::Vector2<i64>;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Interior angles (radians) closer than this to 0 or π cannot be filleted.
///
/// This is a floor: short integer directions cannot resolve angles this fine,
/// so fillet construction widens it to the directions' own resolution.
pub const ANGLE_TOLERANCE: f64 = 1e-9;

/// Largest tangent length a fillet may have (1 m in board units).
pub const MAX_TANGENT: i64 = 1_000_000_000;
