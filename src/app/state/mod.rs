mod bridge;
mod constants;
mod operations;

use crate::backend::BackendClient;
use crate::config::AppConfig;
use crate::context::{ResolvedContext, ViewerContext, resolve};
use crate::geometry::{PanelSize, Rect};
use crate::platform::PlatformSelection;
use crate::viewer::ViewerHost;
use iced::Task;

use super::messages::Message;
use super::update::Effect;

pub(in crate::app) use bridge::BridgeState;
pub(crate) use constants::*;
pub(in crate::app) use operations::{InsightsState, PodcastState, RecommendationsState};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) backend: BackendClient,
    pub(super) viewer_host: ViewerHost,
    pub(super) platform: Box<dyn PlatformSelection>,
    pub(super) client_id: String,
    pub(super) public_config_resolved: bool,
    pub(super) viewer: Option<ViewerContext>,
    pub(super) bridge: BridgeState,
    pub(super) window_width: f32,
    pub(super) window_height: f32,
    pub(super) recommendations: RecommendationsState,
    pub(super) insights: InsightsState,
    pub(super) podcast: PodcastState,
}

impl App {
    pub(super) fn new(
        config: AppConfig,
        backend: BackendClient,
        platform: Box<dyn PlatformSelection>,
    ) -> Self {
        App {
            client_id: config.viewer_client_id.clone(),
            public_config_resolved: false,
            viewer: None,
            bridge: BridgeState::new(&config),
            window_width: config.window_width,
            window_height: config.window_height,
            recommendations: RecommendationsState::default(),
            insights: InsightsState::default(),
            podcast: PodcastState::default(),
            viewer_host: ViewerHost,
            platform,
            backend,
            config,
        }
    }

    pub(super) fn bootstrap(
        config: AppConfig,
        backend: BackendClient,
        platform: Box<dyn PlatformSelection>,
        initial_document: Option<String>,
    ) -> (App, Task<Message>) {
        let mut app = App::new(config, backend, platform);
        let mut effects = vec![Effect::FetchPublicConfig];
        if let Some(document_id) = initial_document {
            app.select_document(document_id, &mut effects);
        }
        let tasks: Vec<Task<Message>> = effects
            .into_iter()
            .map(|effect| app.run_effect(effect))
            .collect();
        (app, Task::batch(tasks))
    }

    pub(super) fn viewer_container(&self) -> Rect {
        viewer_container(self.window_width, self.window_height)
    }

    pub(super) fn panel_size(&self) -> PanelSize {
        PanelSize {
            width: self.config.panel_width,
            height: self.config.panel_height,
        }
    }

    pub(super) fn resolved_context(&self) -> ResolvedContext {
        resolve(self.bridge.selection.as_ref(), self.viewer.as_ref())
    }

    /// Short description of what the action panel will act on.
    pub(super) fn context_label(&self) -> String {
        if let Some(selection) = &self.bridge.selection {
            let trimmed = selection.text.trim();
            if !trimmed.is_empty() {
                return format!("“{}”", truncate_chars(trimmed, PANEL_LABEL_MAX_CHARS));
            }
        }
        match &self.viewer {
            Some(ViewerContext {
                document_id,
                page_number: Some(page),
            }) => format!("{document_id} • p.{page}"),
            Some(viewer) => viewer.document_id.clone(),
            None => "Context".to_string(),
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;
    use crate::app::testing::build_test_app;
    use crate::context::{Selection, SelectionOrigin, ViewerContext};
    use std::time::Instant;

    #[test]
    fn label_prefers_selection_then_page() {
        let mut app = build_test_app();
        assert_eq!(app.context_label(), "Context");

        app.viewer = Some(ViewerContext::new("bio101.pdf"));
        assert_eq!(app.context_label(), "bio101.pdf");

        app.viewer.as_mut().unwrap().page_number = Some(3);
        assert_eq!(app.context_label(), "bio101.pdf • p.3");

        app.bridge.selection =
            Selection::new(" osmosis ", Instant::now(), SelectionOrigin::ViewerEvent);
        assert_eq!(app.context_label(), "“osmosis”");
    }

    #[test]
    fn long_labels_are_truncated_on_char_boundaries() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("ééééééé", 4), "ééé…");
    }
}
