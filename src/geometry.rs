//! Placement of the floating action panel.
//!
//! Every coordinate here is in window (client) space except the resolved
//! [`PanelAnchor`], which is relative to the viewer container's content box.

/// Margin kept between the panel and the container's left/top edges.
pub const EDGE_MARGIN: f32 = 8.0;
/// Extra room kept below the panel so it never covers the container's bottom edge.
pub const BOTTOM_GUTTER: f32 = 16.0;
/// Horizontal nudge applied when anchoring to a pointer position.
pub const POINTER_OFFSET_X: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// A selection rectangle is usable unless it collapsed to a point.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    pub width: f32,
    pub height: f32,
}

impl Default for PanelSize {
    fn default() -> Self {
        Self {
            width: 260.0,
            height: 56.0,
        }
    }
}

/// What the panel should hug: a selection's bounding box or the last pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    Rect(Rect),
    Point(Point),
}

/// Top-left of the panel relative to the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelAnchor {
    pub top: f32,
    pub left: f32,
}

/// Compute a clamped panel position, or `None` when no anchor can be derived.
///
/// A degenerate rectangle or a container without area yields `None`; callers are
/// expected to retry with the pointer form.
pub fn resolve_anchor(
    container: Rect,
    anchor: Anchor,
    panel: Option<PanelSize>,
) -> Option<PanelAnchor> {
    if !container.has_area() {
        return None;
    }
    let panel = panel.unwrap_or_default();
    let (left, top) = match anchor {
        Anchor::Rect(rect) => {
            if rect.is_degenerate() {
                return None;
            }
            (
                rect.left - container.left,
                rect.top - container.top - panel.height,
            )
        }
        Anchor::Point(point) => (
            point.x - container.left + POINTER_OFFSET_X,
            point.y - container.top - panel.height,
        ),
    };

    // Lower bound wins when the container is narrower than the panel.
    let max_left = container.width - panel.width;
    let max_top = container.height - panel.height - BOTTOM_GUTTER;
    Some(PanelAnchor {
        left: left.min(max_left).max(EDGE_MARGIN),
        top: top.min(max_top).max(EDGE_MARGIN),
    })
}

/// Try the selection rectangle first and fall back to the pointer position.
pub fn anchor_selection_or_pointer(
    container: Rect,
    selection_rect: Option<Rect>,
    pointer: Option<Point>,
    panel: Option<PanelSize>,
) -> Option<PanelAnchor> {
    selection_rect
        .and_then(|rect| resolve_anchor(container, Anchor::Rect(rect), panel))
        .or_else(|| {
            pointer.and_then(|point| resolve_anchor(container, Anchor::Point(point), panel))
        })
}
