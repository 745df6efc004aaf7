use crate::document::{BoardDocument, DrawingSession};
use crate::error::Result;
use crate::geometry::Ray;
use crate::math::fillet_2d::corner_inset;
use crate::math::Vector2;

/// Places mounting-hole components at outline corners, one per call, in a
/// fixed order.
#[derive(Debug, Clone)]
pub struct HolePlacer {
    names: Vec<String>,
    next: usize,
}

impl HolePlacer {
    /// Creates a placer that will use `names` in order.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }

    /// Number of holes placed so far.
    #[must_use]
    pub fn placed(&self) -> usize {
        self.next
    }

    /// Moves the next hole to `inset` inside the corner formed by the two
    /// rays.
    ///
    /// Returns the position used, or `None` when the hole list is exhausted
    /// or the next hole is not on the board. A missing hole does not consume
    /// its slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the rays do not intersect.
    pub fn place<D: BoardDocument>(
        &mut self,
        session: &mut DrawingSession<'_, D>,
        incoming: &Ray,
        outgoing: &Ray,
        inset: i64,
    ) -> Result<Option<Vector2>> {
        let Some(name) = self.names.get(self.next) else {
            tracing::debug!("no mounting holes left");
            return Ok(None);
        };
        let position = corner_inset(
            incoming.origin(),
            incoming.through(),
            outgoing.origin(),
            outgoing.through(),
            inset,
        )?;
        if session.document().find_component(name).is_none() {
            tracing::debug!(hole = %name, "mounting hole not on board, skipping");
            return Ok(None);
        }
        session.move_component(name, position)?;
        tracing::debug!(hole = %name, ?position, "placed mounting hole");
        self.next += 1;
        Ok(Some(position))
    }
}
