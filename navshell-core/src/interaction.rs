//! Hit-testing for outside-click dismissal

use serde::{Deserialize, Serialize};

/// A point in page coordinates (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds of the panel as laid out by the view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Edges are inclusive
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Where a page interaction landed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InteractionTarget {
    /// Raw pointer position, tested against the last reported panel bounds
    Point(Point),
    /// Containment already resolved by the view (e.g. DOM `Node::contains`)
    Resolved { within_panel: bool },
}

impl InteractionTarget {
    /// Whether the interaction landed inside the panel.
    ///
    /// A point with no known panel bounds counts as outside.
    pub fn is_within(&self, panel_bounds: Option<Rect>) -> bool {
        match *self {
            InteractionTarget::Point(point) => panel_bounds.is_some_and(|bounds| bounds.contains(point)),
            InteractionTarget::Resolved { within_panel } => within_panel,
        }
    }
}
