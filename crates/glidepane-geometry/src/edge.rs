//! Anchor edges and axis-aligned coordinate normalization.
//!
//! A drawer slides in from one viewport edge. All gesture math runs on a
//! normalized coordinate along that edge's axis where an increasing value
//! always means "moving toward the open position", no matter which edge
//! the panel is anchored to.

use crate::geometry::{Point, Size};

/// Orientation of a drawer's travel axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }
}

/// The viewport edge a drawer is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    /// The axis the panel travels along.
    pub fn axis(self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::Horizontal,
            Edge::Top | Edge::Bottom => Axis::Vertical,
        }
    }

    /// Trailing edges measure their axis coordinate from the far side of
    /// the viewport, so normalization flips it.
    pub fn is_trailing(self) -> bool {
        matches!(self, Edge::Right | Edge::Bottom)
    }

    /// Normalize a raw touch position so the coordinate on this edge's
    /// axis grows away from the anchor edge.
    pub fn normalize(self, point: Point, viewport: Size) -> Point {
        match self {
            Edge::Left | Edge::Top => point,
            Edge::Right => Point::new(viewport.width - point.x, point.y),
            Edge::Bottom => Point::new(point.x, viewport.height - point.y),
        }
    }

    /// The normalized coordinate along the travel axis.
    pub fn primary(self, point: Point, viewport: Size) -> f32 {
        let normalized = self.normalize(point, viewport);
        match self.axis() {
            Axis::Horizontal => normalized.x,
            Axis::Vertical => normalized.y,
        }
    }

    /// The coordinate perpendicular to the travel axis.
    pub fn cross(self, point: Point, viewport: Size) -> f32 {
        let normalized = self.normalize(point, viewport);
        match self.axis() {
            Axis::Horizontal => normalized.y,
            Axis::Vertical => normalized.x,
        }
    }

    /// Map a normalized translation (distance from the fully-open
    /// position) to a screen-space translation vector. Leading edges
    /// translate negative, trailing edges positive.
    pub fn signed_translation(self, translate: f32) -> Point {
        let signed = if self.is_trailing() {
            translate
        } else {
            -translate
        };
        match self.axis() {
            Axis::Horizontal => Point::new(signed, 0.0),
            Axis::Vertical => Point::new(0.0, signed),
        }
    }
}
