use std::f64::consts::PI;

use crate::error::{GeometryError, Result};

use super::intersect_2d::ray_ray_intersect;
use super::vector::{truncate, VectorExt};
use super::{Vector2, ANGLE_TOLERANCE, MAX_TANGENT, TOLERANCE};

/// A rounded corner between two directed segments.
///
/// The arc is fully determined by `entry`, `mid` and `exit`, which is how
/// board documents take arcs. `corner` is the sharp vertex the arc replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fillet {
    /// Where the incoming straight run ends and the arc begins.
    pub entry: Vector2,
    /// Midpoint of the arc.
    pub mid: Vector2,
    /// Where the arc ends and the outgoing straight run begins.
    pub exit: Vector2,
    /// Intersection of the two lines.
    pub corner: Vector2,
    /// Requested radius.
    pub radius: i64,
}

impl Fillet {
    fn collapsed(corner: Vector2) -> Self {
        Self {
            entry: corner,
            mid: corner,
            exit: corner,
            corner,
            radius: 0,
        }
    }

    /// Whether the arc has shrunk to a single point.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.entry == self.exit
    }

    /// Centre of the circle through `entry`, `mid` and `exit`.
    ///
    /// Returns `None` when the three points are collinear (including the
    /// collapsed case).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn center(&self) -> Option<(f64, f64)> {
        // Relative to `entry` to keep the squared terms small.
        let b = self.mid - self.entry;
        let c = self.exit - self.entry;
        let (bx, by) = (b.x as f64, b.y as f64);
        let (cx, cy) = (c.x as f64, c.y as f64);

        let d = 2.0 * (bx * cy - by * cx);
        if d.abs() < TOLERANCE {
            return None;
        }
        let b2 = bx * bx + by * by;
        let c2 = cx * cx + cy * cy;
        let ux = (cy * b2 - by * c2) / d;
        let uy = (bx * c2 - cx * b2) / d;
        Some((self.entry.x as f64 + ux, self.entry.y as f64 + uy))
    }
}

/// Computes the fillet of radius `radius` between directed segments `ab`
/// (incoming) and `cd` (outgoing).
///
/// Both segments point toward the corner where their lines meet. The tangent
/// points sit `radius / tan(θ / 2)` short of the corner, where θ is the angle
/// between the two directions. The arc midpoint lies on the line from the
/// corner to the midpoint of the tangent points, `sqrt(t² + r²) - r` away from
/// the corner.
///
/// A radius of zero collapses the fillet onto the corner.
///
/// # Errors
///
/// - [`GeometryError::ParameterOutOfRange`] for a negative radius.
/// - [`GeometryError::Degenerate`] when the lines do not intersect.
/// - [`GeometryError::SingularFillet`] when θ is within the angular
///   resolution of the two directions (never finer than
///   [`ANGLE_TOLERANCE`]) of 0 or π, or when the tangent length would exceed
///   [`MAX_TANGENT`].
#[allow(clippy::cast_precision_loss)]
pub fn compute_fillet(
    a: &Vector2,
    b: &Vector2,
    c: &Vector2,
    d: &Vector2,
    radius: i64,
) -> Result<Fillet> {
    if radius < 0 {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "radius",
            value: radius as f64,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into());
    }

    let corner = ray_ray_intersect(a, b, c, d)?;
    let ab = b - a;
    let cd = d - c;

    let cos = ab.dot_2d(&cd) as f64 / (ab.length() * cd.length());
    let angle = cos.clamp(-1.0, 1.0).acos();
    // Truncated endpoints tilt an integer direction of length L by up to
    // about 2/L radians.
    let tolerance = ANGLE_TOLERANCE.max(2.0 / ab.length().min(cd.length()));
    if angle < tolerance || PI - angle < tolerance {
        return Err(GeometryError::SingularFillet {
            angle_deg: angle.to_degrees(),
        }
        .into());
    }

    if radius == 0 {
        return Ok(Fillet::collapsed(corner));
    }

    let r = radius as f64;
    let tangent = r / (angle / 2.0).tan();
    if tangent > MAX_TANGENT as f64 {
        return Err(GeometryError::SingularFillet {
            angle_deg: angle.to_degrees(),
        }
        .into());
    }
    let tangent = truncate(tangent);

    let entry = b + ab.resized(truncate(
        distance_along(a, &ab, &corner) - ab.length() - tangent as f64,
    ))?;
    let exit = d + cd.resized(truncate(
        distance_along(c, &cd, &corner) - cd.length() - tangent as f64,
    ))?;

    let to_corner = corner - entry.midpoint(&exit);
    let mid = if to_corner.is_zero_length() {
        corner
    } else {
        let center_distance = (tangent as f64).hypot(r);
        corner - to_corner.resized(truncate(center_distance - r))?
    };

    tracing::trace!(
        ?corner,
        angle_deg = angle.to_degrees(),
        tangent,
        radius,
        "fillet"
    );

    Ok(Fillet {
        entry,
        mid,
        exit,
        corner,
        radius,
    })
}

/// Point inset from the corner of two directed segments.
///
/// Moves back from the corner by `inset` along each segment's direction, so a
/// positive inset lands inside the wedge the two segments enclose.
///
/// # Errors
///
/// Returns an error if the lines do not intersect.
pub fn corner_inset(
    a: &Vector2,
    b: &Vector2,
    c: &Vector2,
    d: &Vector2,
    inset: i64,
) -> Result<Vector2> {
    let corner = ray_ray_intersect(a, b, c, d)?;
    Ok(corner - (b - a).resized(inset)? - (d - c).resized(inset)?)
}

/// Signed distance from `origin` to `point` measured along `dir`.
#[allow(clippy::cast_precision_loss)]
fn distance_along(origin: &Vector2, dir: &Vector2, point: &Vector2) -> f64 {
    (point - origin).dot_2d(dir) as f64 / dir.length()
}
