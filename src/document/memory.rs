use std::collections::HashMap;

use crate::error::{DocumentError, Result};
use crate::geometry::Primitive;
use crate::math::Vector2;

use super::{BoardDocument, Component, Layer};

/// A primitive stored on a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawing {
    pub layer: Layer,
    pub primitive: Primitive,
}

/// In-memory [`BoardDocument`].
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    components: HashMap<String, Component>,
    drawings: Vec<Drawing>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a component.
    pub fn insert_component(&mut self, name: impl Into<String>, component: Component) {
        self.components.insert(name.into(), component);
    }

    /// All drawings in insertion order.
    #[must_use]
    pub fn drawings(&self) -> &[Drawing] {
        &self.drawings
    }

    /// Primitives drawn on `layer`, in insertion order.
    #[must_use]
    pub fn primitives_on(&self, layer: Layer) -> impl Iterator<Item = &Primitive> + '_ {
        self.drawings
            .iter()
            .filter(move |d| d.layer == layer)
            .map(|d| &d.primitive)
    }

    fn push(&mut self, layer: Layer, primitive: Primitive) {
        self.drawings.push(Drawing { layer, primitive });
    }
}

impl BoardDocument for MemoryDocument {
    fn find_component(&self, name: &str) -> Option<Component> {
        self.components.get(name).copied()
    }

    fn set_component_position(&mut self, name: &str, position: Vector2) -> Result<()> {
        let component = self
            .components
            .get_mut(name)
            .ok_or_else(|| DocumentError::ComponentNotFound(name.to_owned()))?;
        component.position = position;
        Ok(())
    }

    fn add_segment(&mut self, start: Vector2, end: Vector2, layer: Layer) {
        self.push(layer, Primitive::Segment { start, end });
    }

    fn add_arc(&mut self, start: Vector2, mid: Vector2, end: Vector2, layer: Layer) {
        self.push(layer, Primitive::Arc { start, mid, end });
    }

    fn add_cubic_bezier(
        &mut self,
        start: Vector2,
        c1: Vector2,
        c2: Vector2,
        end: Vector2,
        layer: Layer,
    ) {
        self.push(layer, Primitive::CubicBezier { start, c1, c2, end });
    }

    fn remove_drawings(&mut self, layer: Layer) {
        self.drawings.retain(|d| d.layer != layer);
    }
}
