use serde::Deserialize;

use crate::error::{GeometryError, Result};
use crate::math::mm;

/// Parameters shared by every step of a contour trace.
///
/// All lengths are in board units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Radius used when a step does not name one.
    pub fillet_radius: i64,
    /// Length of the short direction rays built from headings.
    pub ray_length: i64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            fillet_radius: mm(1.0),
            ray_length: mm(0.1),
        }
    }
}

impl TraceConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] for a negative radius or
    /// a non-positive ray length.
    pub fn new(fillet_radius: i64, ray_length: i64) -> Result<Self> {
        let config = Self {
            fillet_radius,
            ray_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants [`TraceConfig::new`] enforces, for values that
    /// arrived through deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] on the first bad field.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<()> {
        if self.fillet_radius < 0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "fillet_radius",
                value: self.fillet_radius as f64,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        if self.ray_length <= 0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "ray_length",
                value: self.ray_length as f64,
                min: 1.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(())
    }
}
