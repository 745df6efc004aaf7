use crate::error::{DocumentError, Result};
use crate::geometry::{Contour, Direction, Heading, Primitive};
use crate::math::{Vector2, VectorExt};

use super::{BoardDocument, Component, Layer};

/// A point derived from a component, carrying the component's rotation in
/// the board's clockwise-positive convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub position: Vector2,
    pub angle_deg: f64,
}

impl Anchor {
    /// `heading` turned to match the component.
    #[must_use]
    pub fn direction(&self, heading: Heading) -> Direction {
        heading.rotated(self.angle_deg)
    }

    /// Position moved by `offset` expressed in the component's frame.
    #[must_use]
    pub fn shifted(&self, offset: Vector2) -> Self {
        Self {
            position: self.position + offset.rotated(self.angle_deg),
            angle_deg: self.angle_deg,
        }
    }
}

/// One drawing pass over a document, bound to the layer being drawn.
pub struct DrawingSession<'a, D: BoardDocument> {
    document: &'a mut D,
    layer: Layer,
}

impl<'a, D: BoardDocument> DrawingSession<'a, D> {
    #[must_use]
    pub fn new(document: &'a mut D, layer: Layer) -> Self {
        Self { document, layer }
    }

    #[must_use]
    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &*self.document
    }

    /// Looks up a component.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::ComponentNotFound`] if it does not exist.
    pub fn component(&self, name: &str) -> Result<Component> {
        self.document
            .find_component(name)
            .ok_or_else(|| DocumentError::ComponentNotFound(name.to_owned()).into())
    }

    /// Point at `offset` from a component, measured in the component's
    /// rotated frame.
    ///
    /// Host orientation is counter-clockwise-positive while board rotation is
    /// clockwise-positive, so the anchor angle is the negated orientation.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::ComponentNotFound`] if it does not exist.
    pub fn anchor(&self, name: &str, offset: Vector2) -> Result<Anchor> {
        let component = self.component(name)?;
        let anchor = Anchor {
            position: component.position,
            angle_deg: -component.orientation_deg,
        };
        Ok(anchor.shifted(offset))
    }

    /// Removes everything already drawn on the session's layer.
    pub fn clear(&mut self) {
        tracing::debug!(layer = ?self.layer, "clearing layer");
        self.document.remove_drawings(self.layer);
    }

    /// Appends every primitive of `contour` to the session's layer, in order.
    pub fn emit(&mut self, contour: &Contour) {
        tracing::debug!(layer = ?self.layer, primitives = contour.len(), "emitting contour");
        for primitive in contour {
            match *primitive {
                Primitive::Segment { start, end } => {
                    self.document.add_segment(start, end, self.layer);
                }
                Primitive::Arc { start, mid, end } => {
                    self.document.add_arc(start, mid, end, self.layer);
                }
                Primitive::CubicBezier { start, c1, c2, end } => {
                    self.document.add_cubic_bezier(start, c1, c2, end, self.layer);
                }
            }
        }
    }

    /// Moves a component.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::ComponentNotFound`] if it does not exist.
    pub fn move_component(&mut self, name: &str, position: Vector2) -> Result<()> {
        self.document.set_component_position(name, position)
    }
}
