use crate::error::Result;
use crate::geometry::{Contour, Primitive, Ray};
use crate::math::fillet_2d::compute_fillet;

/// Draws one rounded corner with both straight legs, independent of any
/// running trace.
///
/// The result runs from the incoming ray's origin to the arc, around it, and
/// back out to the outgoing ray's origin.
#[derive(Debug)]
pub struct FilletCorner {
    incoming: Ray,
    outgoing: Ray,
    radius: i64,
}

impl FilletCorner {
    /// Creates a new corner operation.
    #[must_use]
    pub fn new(incoming: Ray, outgoing: Ray, radius: i64) -> Self {
        Self {
            incoming,
            outgoing,
            radius,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns the geometry error if the corner cannot be filleted.
    pub fn execute(&self) -> Result<Contour> {
        let fillet = compute_fillet(
            self.incoming.origin(),
            self.incoming.through(),
            self.outgoing.origin(),
            self.outgoing.through(),
            self.radius,
        )?;

        let mut contour = Contour::new();
        contour.push(Primitive::Segment {
            start: *self.incoming.origin(),
            end: fillet.entry,
        });
        if !fillet.is_collapsed() {
            contour.push(Primitive::Arc {
                start: fillet.entry,
                mid: fillet.mid,
                end: fillet.exit,
            });
        }
        contour.push(Primitive::Segment {
            start: fillet.exit,
            end: *self.outgoing.origin(),
        });
        Ok(contour)
    }
}
