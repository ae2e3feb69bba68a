use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::ViewerApisReady => self.handle_viewer_apis_ready(&mut effects),
            Message::ViewerEvent { event, at } => {
                self.handle_viewer_event(&event, at, &mut effects);
            }
            Message::CopyGesture { at } => self.handle_copy_gesture(at, &mut effects),
            Message::CursorMoved(position) => self.bridge.pointer.cursor = Some(position),
            Message::PointerReleased => self.handle_pointer_released(),
            Message::WindowResized { width, height } => {
                self.window_width = width;
                self.window_height = height;
            }
            Message::KeyPressed {
                key,
                modifiers,
                at,
            } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers, at) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::DocumentSelected(document_id) => {
                self.select_document(document_id, &mut effects);
            }
            Message::PublicConfigLoaded(client_id) => {
                self.handle_public_config_loaded(client_id, &mut effects);
            }
            Message::ShowActions => self.handle_show_actions(),
            Message::PanelHovered => self.handle_panel_hovered(),
            Message::ClosePanel => self.bridge.panel.hide(),
            Message::RecommendRequested => self.handle_recommend_requested(&mut effects),
            Message::InsightsRequested => self.handle_insights_requested(&mut effects),
            Message::PodcastRequested => self.handle_podcast_requested(&mut effects),
            Message::RecommendationClicked(idx) => {
                self.handle_recommendation_clicked(idx, &mut effects);
            }
            Message::CitationClicked(idx) => self.handle_citation_clicked(idx, &mut effects),
            Message::CloseInsights => self.insights.visible = false,
            Message::RecommendationsLoaded { request_id, result } => {
                self.handle_recommendations_loaded(request_id, result);
            }
            Message::InsightsLoaded { request_id, result } => {
                self.handle_insights_loaded(request_id, result);
            }
            Message::PodcastGenerated { request_id, result } => {
                self.handle_podcast_generated(request_id, result);
            }
            Message::Tick(now) => self.handle_tick(now),
        }

        effects
    }
}
