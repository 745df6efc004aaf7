//! Fixed-point vector arithmetic.
//!
//! Every operation that passes through floating point truncates its result
//! toward zero before returning to integer board units. Applying the same rule
//! everywhere keeps long contours reproducible against previously
//! manufactured outlines.

use crate::error::{GeometryError, Result};

use super::Vector2;

/// Board units per millimetre.
pub const IU_PER_MM: f64 = 1e6;

/// Converts millimetres to board units, truncating toward zero.
#[must_use]
pub fn mm(value: f64) -> i64 {
    truncate(value * IU_PER_MM)
}

/// Converts board units to millimetres.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_mm(value: i64) -> f64 {
    value as f64 / IU_PER_MM
}

/// Truncates toward zero into board units.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

/// Fixed-point operations on [`Vector2`] beyond what nalgebra offers for
/// integer scalars.
///
/// Products are computed in `i128` so that nanometre coordinates spanning a
/// full board never overflow.
pub trait VectorExt: Sized {
    /// Multiplies both components by `factor`.
    #[must_use]
    fn scaled(&self, factor: f64) -> Self;

    /// Exact dot product.
    #[must_use]
    fn dot_2d(&self, other: &Self) -> i128;

    /// Exact z-component of the 3D cross product.
    #[must_use]
    fn cross_2d(&self, other: &Self) -> i128;

    /// Euclidean length.
    #[must_use]
    fn length(&self) -> f64;

    /// Returns a vector with the same direction and the given length.
    ///
    /// A negative `length` points the result the opposite way.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `self` has zero length.
    fn resized(&self, length: i64) -> Result<Self>;

    /// Rotates about the origin by `angle_deg`.
    ///
    /// With the board's y axis pointing down, positive angles turn clockwise.
    #[must_use]
    fn rotated(&self, angle_deg: f64) -> Self;

    /// Component-wise midpoint of `self` and `other`.
    #[must_use]
    fn midpoint(&self, other: &Self) -> Self;

    /// Whether both components are zero.
    #[must_use]
    fn is_zero_length(&self) -> bool;
}

#[allow(clippy::cast_precision_loss)]
impl VectorExt for Vector2 {
    fn scaled(&self, factor: f64) -> Self {
        Vector2::new(
            truncate(self.x as f64 * factor),
            truncate(self.y as f64 * factor),
        )
    }

    fn dot_2d(&self, other: &Self) -> i128 {
        i128::from(self.x) * i128::from(other.x) + i128::from(self.y) * i128::from(other.y)
    }

    fn cross_2d(&self, other: &Self) -> i128 {
        i128::from(self.x) * i128::from(other.y) - i128::from(self.y) * i128::from(other.x)
    }

    fn length(&self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }

    fn resized(&self, length: i64) -> Result<Self> {
        if self.is_zero_length() {
            return Err(GeometryError::ZeroVector.into());
        }
        let current = self.length();
        let length = length as f64;
        Ok(Vector2::new(
            truncate(self.x as f64 * length / current),
            truncate(self.y as f64 * length / current),
        ))
    }

    fn rotated(&self, angle_deg: f64) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        let (x, y) = (self.x as f64, self.y as f64);
        Vector2::new(truncate(c * x - s * y), truncate(s * x + c * y))
    }

    fn midpoint(&self, other: &Self) -> Self {
        Vector2::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    fn is_zero_length(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}
