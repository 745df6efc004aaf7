use crate::math::Vector2;

/// A drawable shape handed to the board document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Straight line from `start` to `end`.
    Segment { start: Vector2, end: Vector2 },
    /// Circular arc through three points.
    Arc {
        start: Vector2,
        mid: Vector2,
        end: Vector2,
    },
    /// Cubic Bezier with control points `c1` and `c2`.
    CubicBezier {
        start: Vector2,
        c1: Vector2,
        c2: Vector2,
        end: Vector2,
    },
}

impl Primitive {
    /// Point where the primitive begins.
    #[must_use]
    pub fn start(&self) -> Vector2 {
        match *self {
            Self::Segment { start, .. }
            | Self::Arc { start, .. }
            | Self::CubicBezier { start, .. } => start,
        }
    }

    /// Point where the primitive ends.
    #[must_use]
    pub fn end(&self) -> Vector2 {
        match *self {
            Self::Segment { end, .. } | Self::Arc { end, .. } | Self::CubicBezier { end, .. } => {
                end
            }
        }
    }
}
