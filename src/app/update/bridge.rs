use super::super::state::{App, actions_button};
use super::Effect;
use crate::context::{ContextQuery, Selection, SelectionOrigin};
use crate::geometry::{Anchor, anchor_selection_or_pointer, resolve_anchor};
use crate::viewer::{CanonicalSignal, RawViewerEvent, classify};
use std::time::Instant;
use tracing::{debug, info, trace};

impl App {
    pub(super) fn handle_viewer_apis_ready(&mut self, effects: &mut Vec<Effect>) {
        info!("Viewer APIs ready");
        if let Some(page) = self.bridge.mark_viewer_ready() {
            debug!(page, "Flushing pending navigation");
            effects.push(Effect::JumpToPage(page));
        }
    }

    pub(super) fn handle_viewer_event(
        &mut self,
        event: &RawViewerEvent,
        at: Instant,
        effects: &mut Vec<Effect>,
    ) {
        if self.viewer.is_none() {
            trace!(kind = ?event.kind, "Viewer event without an open document");
            return;
        }

        match classify(event) {
            CanonicalSignal::Selected { text } => {
                self.accept_selection(&text, SelectionOrigin::ViewerEvent, at, effects);
            }
            CanonicalSignal::Deselected => {
                debug!("Selection cleared by viewer");
                self.clear_selection();
            }
            CanonicalSignal::PageChanged { page } => self.handle_page_changed(page, effects),
            CanonicalSignal::Unrecognized => {
                trace!(kind = ?event.kind, "Ignoring viewer event");
            }
        }
    }

    fn handle_page_changed(&mut self, page: u32, effects: &mut Vec<Effect>) {
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };
        debug!(document = %viewer.document_id, page, "Page changed");
        viewer.page_number = Some(page);
        let query = ContextQuery::Locator {
            document_id: viewer.document_id.clone(),
            page_number: page,
        };
        self.clear_selection();
        self.dispatch_recommendations(query, effects);
    }

    /// Drop the live selection; a later identical selection is a new gesture.
    fn clear_selection(&mut self) {
        self.bridge.selection = None;
        self.bridge.debouncer.reset();
        self.bridge.panel.hide();
    }

    /// Native copy gesture: read the platform selection and treat it like a viewer selection.
    pub(super) fn handle_copy_gesture(&mut self, at: Instant, effects: &mut Vec<Effect>) {
        if self.viewer.is_none() {
            return;
        }
        let text = match self.platform.selected_text() {
            Ok(text) => text,
            Err(err) => {
                debug!("No native selection on copy: {err:#}");
                return;
            }
        };
        self.accept_selection(&text, SelectionOrigin::NativeCopy, at, effects);
    }

    fn accept_selection(
        &mut self,
        text: &str,
        origin: SelectionOrigin,
        at: Instant,
        effects: &mut Vec<Effect>,
    ) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        if self.bridge.debouncer.should_suppress(trimmed, at) {
            debug!(?origin, "Suppressing duplicate selection");
            return;
        }

        self.bridge.selection = Selection::new(trimmed, at, origin);

        let selection_rect = match self.platform.selection_rect() {
            Ok(rect) => rect,
            Err(err) => {
                trace!("Selection geometry unavailable: {err:#}");
                None
            }
        };
        let anchor = anchor_selection_or_pointer(
            self.viewer_container(),
            selection_rect,
            self.bridge.pointer.last_release,
            Some(self.panel_size()),
        );
        self.bridge.panel.show(anchor, at);

        debug!(?origin, chars = trimmed.chars().count(), "Selection captured");
        self.dispatch_recommendations(
            ContextQuery::Text {
                text: trimmed.to_string(),
            },
            effects,
        );
    }

    pub(super) fn handle_pointer_released(&mut self) {
        self.bridge.pointer.last_release = self.bridge.pointer.cursor;
    }

    /// Open the panel over the "Actions" button, regardless of any selection.
    pub(super) fn handle_show_actions(&mut self) {
        if self.viewer.is_none() {
            return;
        }
        let container = self.viewer_container();
        let anchor = resolve_anchor(
            container,
            Anchor::Rect(actions_button(container)),
            Some(self.panel_size()),
        );
        self.bridge.panel.show(anchor, Instant::now());
    }

    pub(super) fn handle_panel_hovered(&mut self) {
        self.bridge.panel.poke(Instant::now());
    }

    pub(super) fn handle_tick(&mut self, now: Instant) {
        if self.bridge.panel.auto_hide.fire(now) {
            debug!("Auto-hiding idle action panel");
            self.bridge.panel.visible = false;
            self.bridge.panel.anchor = None;
        }
    }
}
