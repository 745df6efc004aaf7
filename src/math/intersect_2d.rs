use crate::error::{GeometryError, Result};

use super::vector::{truncate, VectorExt};
use super::Vector2;

/// Intersection of two infinite lines given as directed segments.
///
/// Line 1 runs from `p` through `a`, line 2 from `q` through `b`. The points
/// `a` and `b` only fix direction; the result is not bounded to either
/// segment.
///
/// With `R = a - p` and `S = b - q`, the intersection is `p + R * t` where
/// `t = cross(q - p, S) / cross(R, S)`. The offset is applied through
/// [`VectorExt::resized`] so it truncates like every other board-unit
/// computation.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] when `cross(R, S) == 0` (parallel or
/// coincident lines, or a zero-length direction).
#[allow(clippy::cast_precision_loss)]
pub fn ray_ray_intersect(p: &Vector2, a: &Vector2, q: &Vector2, b: &Vector2) -> Result<Vector2> {
    let r = a - p;
    let s = b - q;
    let rs = r.cross_2d(&s);
    if rs == 0 {
        return Err(GeometryError::Degenerate(
            "rays are parallel or one of them has zero length".to_owned(),
        )
        .into());
    }
    let t = (q - p).cross_2d(&s) as f64 / rs as f64;
    Ok(p + r.resized(truncate(r.length() * t))?)
}
