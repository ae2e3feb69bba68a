use crate::auto_hide::AutoHideTimer;
use crate::config::AppConfig;
use crate::context::Selection;
use crate::debounce::SelectionDebouncer;
use crate::geometry::{PanelAnchor, Point};
use std::time::{Duration, Instant};

/// Per-document state of the selection/navigation bridge.
///
/// Created when a document view mounts and replaced wholesale when another
/// document is selected.
pub struct BridgeState {
    pub(in crate::app) selection: Option<Selection>,
    pub(in crate::app) pointer: PointerState,
    pub(in crate::app) pending_page: Option<u32>,
    pub(in crate::app) viewer_ready: bool,
    pub(in crate::app) debouncer: SelectionDebouncer,
    pub(in crate::app) panel: PanelState,
}

impl BridgeState {
    pub(in crate::app) fn new(config: &AppConfig) -> Self {
        Self {
            selection: None,
            pointer: PointerState::default(),
            pending_page: None,
            viewer_ready: false,
            debouncer: SelectionDebouncer::new(Duration::from_millis(config.copy_dedupe_ms)),
            panel: PanelState::new(Duration::from_millis(config.auto_hide_ms)),
        }
    }

    /// Returns the page to jump to now, or parks it until the viewer is ready.
    /// A newer parked page replaces an older one.
    pub(in crate::app) fn request_page(&mut self, page: u32) -> Option<u32> {
        if self.viewer_ready {
            Some(page)
        } else {
            self.pending_page = Some(page);
            None
        }
    }

    pub(in crate::app) fn mark_viewer_ready(&mut self) -> Option<u32> {
        self.viewer_ready = true;
        self.pending_page.take()
    }
}

/// Last known pointer location; meaningful only as a fallback anchor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub(in crate::app) cursor: Option<Point>,
    pub(in crate::app) last_release: Option<Point>,
}

pub struct PanelState {
    pub(in crate::app) visible: bool,
    pub(in crate::app) anchor: Option<PanelAnchor>,
    pub(in crate::app) auto_hide: AutoHideTimer,
}

impl PanelState {
    fn new(idle: Duration) -> Self {
        Self {
            visible: false,
            anchor: None,
            auto_hide: AutoHideTimer::new(idle),
        }
    }

    pub(in crate::app) fn show(&mut self, anchor: Option<PanelAnchor>, now: Instant) {
        self.visible = true;
        self.anchor = anchor;
        self.auto_hide.poke(now);
    }

    pub(in crate::app) fn hide(&mut self) {
        self.visible = false;
        self.anchor = None;
        self.auto_hide.cancel();
    }

    pub(in crate::app) fn poke(&mut self, now: Instant) {
        if self.visible {
            self.auto_hide.poke(now);
        }
    }
}
