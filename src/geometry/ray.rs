use crate::error::{GeometryError, Result};
use crate::math::{Vector2, VectorExt};

/// A directed segment: an origin and a second point fixing the direction.
///
/// `through` is usually only a short step from `origin`; the ray is treated
/// as an infinite line wherever it is intersected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ray {
    origin: Vector2,
    through: Vector2,
}

impl Ray {
    /// Creates a new ray.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `origin == through`.
    pub fn new(origin: Vector2, through: Vector2) -> Result<Self> {
        if origin == through {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self { origin, through })
    }

    /// Returns the starting point.
    #[must_use]
    pub fn origin(&self) -> &Vector2 {
        &self.origin
    }

    /// Returns the point that fixes the direction.
    #[must_use]
    pub fn through(&self) -> &Vector2 {
        &self.through
    }

    /// Returns `through - origin`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.through - self.origin
    }
}

/// One of the four axis directions in the board frame (y pointing down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Left,
    Right,
    Up,
    Down,
}

impl Heading {
    /// Axis-aligned vector of the given length.
    #[must_use]
    pub fn vector(self, length: i64) -> Vector2 {
        match self {
            Self::Left => Vector2::new(-length, 0),
            Self::Right => Vector2::new(length, 0),
            Self::Up => Vector2::new(0, -length),
            Self::Down => Vector2::new(0, length),
        }
    }

    /// This heading turned by `angle_deg` (clockwise-positive).
    #[must_use]
    pub fn rotated(self, angle_deg: f64) -> Direction {
        Direction::new(self, angle_deg)
    }
}

/// A heading turned by an angle, usually a component's orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    pub heading: Heading,
    /// Rotation in degrees, clockwise-positive.
    pub angle_deg: f64,
}

impl Direction {
    #[must_use]
    pub fn new(heading: Heading, angle_deg: f64) -> Self {
        Self { heading, angle_deg }
    }

    /// Offset of `length` in this direction.
    #[must_use]
    pub fn vector(&self, length: i64) -> Vector2 {
        self.heading.vector(length).rotated(self.angle_deg)
    }

    /// `point` moved `length` in this direction.
    #[must_use]
    pub fn offset(&self, point: &Vector2, length: i64) -> Vector2 {
        point + self.vector(length)
    }

    /// A ray from `origin` pointing this way, with a step of `length`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `length` rounds to nothing.
    pub fn ray(&self, origin: &Vector2, length: i64) -> Result<Ray> {
        Ray::new(*origin, self.offset(origin, length))
    }
}

impl From<Heading> for Direction {
    fn from(heading: Heading) -> Self {
        Self::new(heading, 0.0)
    }
}

/// A Bezier tangent handle: a direction and how far the control point sits
/// from the curve's end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub direction: Direction,
    pub length: i64,
}

impl Handle {
    #[must_use]
    pub fn new(direction: impl Into<Direction>, length: i64) -> Self {
        Self {
            direction: direction.into(),
            length,
        }
    }

    /// The control point for a curve end at `point`.
    #[must_use]
    pub fn offset(&self, point: &Vector2) -> Vector2 {
        self.direction.offset(point, self.length)
    }
}
