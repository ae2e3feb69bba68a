use crate::geometry::Rect;
use std::time::Duration;

/// Fixed layout of the main window, in logical pixels.
pub(crate) const HEADER_HEIGHT: f32 = 56.0;
pub(crate) const SIDEBAR_WIDTH: f32 = 380.0;
pub(crate) const VIEWER_PADDING: f32 = 16.0;
pub(crate) const ACTIONS_BUTTON_WIDTH: f32 = 96.0;
pub(crate) const ACTIONS_BUTTON_HEIGHT: f32 = 32.0;
pub(crate) const ACTIONS_BUTTON_INSET: f32 = 12.0;
pub(crate) const PANEL_LABEL_MAX_CHARS: usize = 40;
/// Poll rate for the auto-hide deadline while one is armed.
pub(crate) const HIDE_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Bounding box of the viewer container for a window of the given size.
pub(crate) fn viewer_container(window_width: f32, window_height: f32) -> Rect {
    Rect::new(
        VIEWER_PADDING,
        HEADER_HEIGHT + VIEWER_PADDING,
        (window_width - SIDEBAR_WIDTH - 2.0 * VIEWER_PADDING).max(0.0),
        (window_height - HEADER_HEIGHT - 2.0 * VIEWER_PADDING).max(0.0),
    )
}

/// Bounding box of the always-visible "Actions" button inside the container.
pub(crate) fn actions_button(container: Rect) -> Rect {
    Rect::new(
        container.left + container.width - ACTIONS_BUTTON_INSET - ACTIONS_BUTTON_WIDTH,
        container.top + container.height - ACTIONS_BUTTON_INSET - ACTIONS_BUTTON_HEIGHT,
        ACTIONS_BUTTON_WIDTH,
        ACTIONS_BUTTON_HEIGHT,
    )
}
