//! The board document the outline is drawn into.
//!
//! The host CAD tool owns component placement and drawn shapes; this module
//! models only the narrow slice the outline code needs: looking components up
//! by reference name and appending primitives to a layer.

mod memory;
mod session;

pub use memory::{Drawing, MemoryDocument};
pub use session::{Anchor, DrawingSession};

use crate::error::Result;
use crate::math::Vector2;

/// Drawing layer of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Board edge, used for milling.
    EdgeCuts,
    /// Numbered user drawing layer.
    User(u8),
}

/// Placement of a component on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    pub position: Vector2,
    /// Orientation in degrees as reported by the host.
    pub orientation_deg: f64,
}

impl Component {
    #[must_use]
    pub fn new(position: Vector2, orientation_deg: f64) -> Self {
        Self {
            position,
            orientation_deg,
        }
    }
}

/// The host collaborator: component lookup plus a primitive sink.
///
/// Appends are fire-and-forget and must be kept in call order.
pub trait BoardDocument {
    /// Looks a component up by reference name (e.g. `"S65"`).
    fn find_component(&self, name: &str) -> Option<Component>;

    /// Moves a component.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::DocumentError::ComponentNotFound`] if no
    /// component has this name.
    fn set_component_position(&mut self, name: &str, position: Vector2) -> Result<()>;

    fn add_segment(&mut self, start: Vector2, end: Vector2, layer: Layer);

    fn add_arc(&mut self, start: Vector2, mid: Vector2, end: Vector2, layer: Layer);

    fn add_cubic_bezier(
        &mut self,
        start: Vector2,
        c1: Vector2,
        c2: Vector2,
        end: Vector2,
        layer: Layer,
    );

    /// Deletes every drawing on `layer`.
    fn remove_drawings(&mut self, layer: Layer);
}
