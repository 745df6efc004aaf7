use crate::math::{Vector2, VectorExt};

use super::Primitive;

/// An ordered chain of primitives tracing one outline, open or closed.
///
/// Contours only grow; once traced they are handed to the document as a
/// whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contour {
    primitives: Vec<Primitive>,
}

impl Contour {
    /// Creates an empty contour.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Returns the primitives in trace order.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Start of the first primitive.
    #[must_use]
    pub fn first_point(&self) -> Option<Vector2> {
        self.primitives.first().map(Primitive::start)
    }

    /// End of the last primitive.
    #[must_use]
    pub fn last_point(&self) -> Option<Vector2> {
        self.primitives.last().map(Primitive::end)
    }

    /// Whether the trace ends within `tolerance` of where it started.
    #[must_use]
    pub fn is_closed(&self, tolerance: i64) -> bool {
        match (self.first_point(), self.last_point()) {
            (Some(first), Some(last)) => within(&first, &last, tolerance),
            _ => false,
        }
    }

    /// Whether every primitive starts within `tolerance` of where the
    /// previous one ended.
    #[must_use]
    pub fn is_continuous(&self, tolerance: i64) -> bool {
        self.primitives
            .windows(2)
            .all(|pair| within(&pair[0].end(), &pair[1].start(), tolerance))
    }
}

#[allow(clippy::cast_precision_loss)]
fn within(p: &Vector2, q: &Vector2, tolerance: i64) -> bool {
    (p - q).length() <= tolerance as f64
}

impl<'a> IntoIterator for &'a Contour {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}

impl IntoIterator for Contour {
    type Item = Primitive;
    type IntoIter = std::vec::IntoIter<Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.into_iter()
    }
}
