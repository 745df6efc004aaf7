use crate::config::TraceConfig;
use crate::error::{OperationError, Result};
use crate::geometry::{Contour, Direction, Handle, Primitive};
use crate::math::fillet_2d::compute_fillet;
use crate::math::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraceState {
    Idle,
    Tracing { cursor: Vector2 },
}

/// Builds a contour by threading a cursor through successive steps.
///
/// Each step starts at the cursor, emits its primitives and leaves the cursor
/// at its end point, so a whole outline is a fold over a list of local
/// (direction, anchor, direction) triples.
///
/// A step that fails leaves both the cursor and the contour exactly as they
/// were, so the caller may skip a bad corner and keep tracing.
#[derive(Debug)]
pub struct ContourTracer {
    config: TraceConfig,
    state: TraceState,
    contour: Contour,
}

impl ContourTracer {
    /// Creates an idle tracer.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `config` fails
    /// [`TraceConfig::validate`], which a deserialized config may.
    pub fn new(config: TraceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::idle(config))
    }

    fn idle(config: TraceConfig) -> Self {
        Self {
            config,
            state: TraceState::Idle,
            contour: Contour::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Starts a contour at `start`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if a contour is already in
    /// progress.
    pub fn begin(&mut self, start: Vector2) -> Result<()> {
        if self.is_tracing() {
            return Err(OperationError::InvalidInput(
                "a contour is already in progress".to_owned(),
            )
            .into());
        }
        tracing::debug!(?start, "begin contour");
        self.state = TraceState::Tracing { cursor: start };
        Ok(())
    }

    /// Current pen position, if tracing.
    #[must_use]
    pub fn cursor(&self) -> Option<Vector2> {
        match self.state {
            TraceState::Idle => None,
            TraceState::Tracing { cursor } => Some(cursor),
        }
    }

    #[must_use]
    pub fn is_tracing(&self) -> bool {
        matches!(self.state, TraceState::Tracing { .. })
    }

    /// Primitives traced so far.
    #[must_use]
    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    /// Draws a straight run from the cursor followed by a fillet arc.
    ///
    /// The run leaves the cursor along `incoming`; the outline continues
    /// through `anchor`, whose line `outgoing` points back toward the corner.
    /// `radius` defaults to [`TraceConfig::fillet_radius`]. A zero radius
    /// yields a sharp vertex and no arc.
    ///
    /// Returns the new cursor: the arc's exit tangent point.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::NotTracing` when idle, or the geometry error
    /// of the failed corner.
    pub fn line_arc(
        &mut self,
        incoming: impl Into<Direction>,
        anchor: Vector2,
        outgoing: impl Into<Direction>,
        radius: Option<i64>,
    ) -> Result<Vector2> {
        let cursor = self.require_cursor()?;
        let incoming: Direction = incoming.into();
        let outgoing: Direction = outgoing.into();
        let radius = radius.unwrap_or(self.config.fillet_radius);
        let ray_length = self.config.ray_length;

        let fillet = incoming
            .ray(&cursor, ray_length)
            .and_then(|inc| {
                let out = outgoing.ray(&anchor, ray_length)?;
                compute_fillet(inc.origin(), inc.through(), out.origin(), out.through(), radius)
            })
            .inspect_err(|err| {
                tracing::warn!(?cursor, ?anchor, radius, %err, "corner rejected");
            })?;

        self.contour.push(Primitive::Segment {
            start: cursor,
            end: fillet.entry,
        });
        if !fillet.is_collapsed() {
            self.contour.push(Primitive::Arc {
                start: fillet.entry,
                mid: fillet.mid,
                end: fillet.exit,
            });
        }
        tracing::debug!(from = ?cursor, to = ?fillet.exit, radius, "line-arc step");
        Ok(self.advance(fillet.exit))
    }

    /// Draws a straight segment from the cursor to `end`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::NotTracing` when idle.
    pub fn line_to(&mut self, end: Vector2) -> Result<Vector2> {
        let start = self.require_cursor()?;
        self.contour.push(Primitive::Segment { start, end });
        tracing::debug!(from = ?start, to = ?end, "line step");
        Ok(self.advance(end))
    }

    /// Draws a cubic Bezier from the cursor to `end`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::NotTracing` when idle.
    pub fn bezier_to(&mut self, c1: Vector2, c2: Vector2, end: Vector2) -> Result<Vector2> {
        let start = self.require_cursor()?;
        self.contour.push(Primitive::CubicBezier { start, c1, c2, end });
        tracing::debug!(from = ?start, to = ?end, "bezier step");
        Ok(self.advance(end))
    }

    /// Draws a cubic Bezier whose control points hang off the cursor and
    /// `end` by the given handles.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::NotTracing` when idle.
    pub fn curve_to(
        &mut self,
        start_handle: Handle,
        end: Vector2,
        end_handle: Handle,
    ) -> Result<Vector2> {
        let start = self.require_cursor()?;
        self.bezier_to(start_handle.offset(&start), end_handle.offset(&end), end)
    }

    /// Ends the contour in progress and returns it, leaving the tracer idle.
    ///
    /// An idle tracer returns an empty contour.
    pub fn finish(&mut self) -> Contour {
        self.state = TraceState::Idle;
        let contour = std::mem::take(&mut self.contour);
        tracing::debug!(primitives = contour.len(), "finish contour");
        contour
    }

    fn require_cursor(&self) -> Result<Vector2> {
        self.cursor().ok_or_else(|| OperationError::NotTracing.into())
    }

    fn advance(&mut self, cursor: Vector2) -> Vector2 {
        self.state = TraceState::Tracing { cursor };
        cursor
    }
}

impl Default for ContourTracer {
    fn default() -> Self {
        Self::idle(TraceConfig::default())
    }
}
