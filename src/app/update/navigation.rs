use super::super::state::{App, BridgeState};
use super::Effect;
use crate::context::ViewerContext;
use tracing::{debug, info, warn};

impl App {
    /// Mount a document: fresh bridge state, and a viewer once the client id is known.
    pub(in crate::app) fn select_document(
        &mut self,
        document_id: String,
        effects: &mut Vec<Effect>,
    ) {
        let document_id = document_id.trim().to_string();
        if document_id.is_empty() {
            warn!("Ignoring empty document id");
            return;
        }
        info!(document = %document_id, "Selecting document");
        self.bridge = BridgeState::new(&self.config);
        self.viewer = Some(ViewerContext::new(document_id.clone()));
        if self.public_config_resolved {
            effects.push(Effect::OpenViewer { document_id });
        }
    }

    pub(super) fn handle_public_config_loaded(
        &mut self,
        client_id: Option<String>,
        effects: &mut Vec<Effect>,
    ) {
        match client_id {
            Some(id) if !id.trim().is_empty() => self.client_id = id.trim().to_string(),
            _ => debug!("Keeping configured viewer client id"),
        }
        let first_resolution = !self.public_config_resolved;
        self.public_config_resolved = true;
        if !first_resolution {
            return;
        }
        if let Some(viewer) = &self.viewer {
            effects.push(Effect::OpenViewer {
                document_id: viewer.document_id.clone(),
            });
        }
    }

    pub(super) fn handle_recommendation_clicked(
        &mut self,
        idx: usize,
        effects: &mut Vec<Effect>,
    ) {
        let Some(item) = self.recommendations.items.get(idx) else {
            warn!(idx, "Recommendation index out of range");
            return;
        };
        let (document_id, page) = (item.document_id.clone(), item.page_number);
        self.navigate_to(document_id.as_deref(), page, effects);
    }

    pub(super) fn handle_citation_clicked(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        let Some(citation) = self
            .insights
            .op
            .result
            .as_ref()
            .and_then(|insights| insights.citations.get(idx))
        else {
            warn!(idx, "Citation index out of range");
            return;
        };
        let (document_id, page) = (citation.document_id.clone(), citation.page_number);
        self.navigate_to(document_id.as_deref(), page, effects);
    }

    /// Open a passage, switching documents when it lives in another one.
    ///
    /// A page in another document is parked until that viewer is ready; a page in
    /// the current document jumps now or once the viewer's API is available.
    fn navigate_to(
        &mut self,
        document_id: Option<&str>,
        page: Option<u32>,
        effects: &mut Vec<Effect>,
    ) {
        let page = page.filter(|page| *page > 0);
        let target = document_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        let current = self.viewer.as_ref().map(|viewer| viewer.document_id.as_str());
        match target {
            Some(document_id) if Some(document_id.as_str()) != current => {
                self.select_document(document_id, effects);
                if let Some(page) = page {
                    self.bridge.pending_page = Some(page);
                }
            }
            _ => {
                if let Some(page) = page.and_then(|page| self.bridge.request_page(page)) {
                    effects.push(Effect::JumpToPage(page));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::app::testing::build_test_app;
    use crate::backend::{Citation, Insights, Recommendation};

    fn recommendation(document_id: &str, page: u32) -> Recommendation {
        Recommendation {
            document_id: Some(document_id.to_string()),
            page_number: Some(page),
            ..Recommendation::default()
        }
    }

    #[test]
    fn viewer_opens_only_after_public_config() {
        let mut app = build_test_app();
        assert!(
            app.reduce(Message::DocumentSelected("bio101.pdf".to_string()))
                .is_empty()
        );

        let effects = app.reduce(Message::PublicConfigLoaded(Some("remote-id".to_string())));
        assert_eq!(
            effects,
            vec![Effect::OpenViewer {
                document_id: "bio101.pdf".to_string()
            }]
        );
        assert_eq!(app.client_id, "remote-id");
    }

    #[test]
    fn missing_public_id_keeps_configured_one() {
        let mut app = build_test_app();
        let configured = app.client_id.clone();
        app.reduce(Message::PublicConfigLoaded(None));
        assert_eq!(app.client_id, configured);
        assert!(app.public_config_resolved);
    }

    #[test]
    fn switching_documents_resets_bridge() {
        let mut app = build_test_app();
        app.reduce(Message::PublicConfigLoaded(None));
        app.reduce(Message::DocumentSelected("bio101.pdf".to_string()));
        app.bridge.viewer_ready = true;
        app.bridge.pending_page = Some(3);

        let effects = app.reduce(Message::DocumentSelected("chem.pdf".to_string()));
        assert_eq!(
            effects,
            vec![Effect::OpenViewer {
                document_id: "chem.pdf".to_string()
            }]
        );
        assert!(!app.bridge.viewer_ready);
        assert_eq!(app.bridge.pending_page, None);
        assert_eq!(app.viewer, Some(ViewerContext::new("chem.pdf")));
    }

    #[test]
    fn click_in_same_document_waits_for_viewer() {
        let mut app = build_test_app();
        app.reduce(Message::PublicConfigLoaded(None));
        app.reduce(Message::DocumentSelected("bio101.pdf".to_string()));
        app.recommendations.items = vec![recommendation("bio101.pdf", 9)];

        assert!(app.reduce(Message::RecommendationClicked(0)).is_empty());
        assert_eq!(app.bridge.pending_page, Some(9));
        assert_eq!(app.reduce(Message::ViewerApisReady), vec![Effect::JumpToPage(9)]);

        assert_eq!(
            app.reduce(Message::RecommendationClicked(0)),
            vec![Effect::JumpToPage(9)]
        );
    }

    #[test]
    fn click_in_other_document_switches_then_jumps() {
        let mut app = build_test_app();
        app.reduce(Message::PublicConfigLoaded(None));
        app.reduce(Message::DocumentSelected("bio101.pdf".to_string()));
        app.reduce(Message::ViewerApisReady);
        app.recommendations.items = vec![recommendation("chem.pdf", 4)];

        let effects = app.reduce(Message::RecommendationClicked(0));
        assert_eq!(
            effects,
            vec![Effect::OpenViewer {
                document_id: "chem.pdf".to_string()
            }]
        );
        assert_eq!(app.bridge.pending_page, Some(4));
        assert_eq!(app.reduce(Message::ViewerApisReady), vec![Effect::JumpToPage(4)]);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let mut app = build_test_app();
        assert!(app.reduce(Message::RecommendationClicked(3)).is_empty());
        assert!(app.reduce(Message::CitationClicked(0)).is_empty());
    }

    fn with_citations(app: &mut App, citations: Vec<Citation>) {
        app.insights.op.result = Some(Insights {
            citations,
            ..Insights::default()
        });
        app.insights.visible = true;
    }

    fn citation(document_id: &str, page: u32) -> Citation {
        Citation {
            document_id: Some(document_id.to_string()),
            page_number: Some(page),
            snippet: Some("ATP yield per glucose".to_string()),
        }
    }

    #[test]
    fn citation_in_other_document_switches_and_parks_page() {
        let mut app = build_test_app();
        app.reduce(Message::PublicConfigLoaded(None));
        app.reduce(Message::DocumentSelected("bio101.pdf".to_string()));
        app.reduce(Message::ViewerApisReady);
        with_citations(&mut app, vec![citation("bio101.pdf", 2), citation("chem.pdf", 11)]);

        let effects = app.reduce(Message::CitationClicked(1));
        assert_eq!(
            effects,
            vec![Effect::OpenViewer {
                document_id: "chem.pdf".to_string()
            }]
        );
        assert_eq!(app.viewer, Some(ViewerContext::new("chem.pdf")));
        assert_eq!(app.bridge.pending_page, Some(11));
        assert!(app.insights.visible);
        assert_eq!(app.reduce(Message::ViewerApisReady), vec![Effect::JumpToPage(11)]);
    }

    #[test]
    fn citation_in_current_document_jumps_when_ready() {
        let mut app = build_test_app();
        app.reduce(Message::PublicConfigLoaded(None));
        app.reduce(Message::DocumentSelected("bio101.pdf".to_string()));
        with_citations(&mut app, vec![citation("bio101.pdf", 6)]);

        assert!(app.reduce(Message::CitationClicked(0)).is_empty());
        assert_eq!(app.bridge.pending_page, Some(6));
        assert_eq!(app.reduce(Message::ViewerApisReady), vec![Effect::JumpToPage(6)]);

        assert_eq!(
            app.reduce(Message::CitationClicked(0)),
            vec![Effect::JumpToPage(6)]
        );
        assert_eq!(app.viewer, Some(ViewerContext::new("bio101.pdf")));
    }

    #[test]
    fn citation_without_document_uses_current_one() {
        let mut app = build_test_app();
        app.reduce(Message::PublicConfigLoaded(None));
        app.reduce(Message::DocumentSelected("bio101.pdf".to_string()));
        app.reduce(Message::ViewerApisReady);
        with_citations(
            &mut app,
            vec![Citation {
                page_number: Some(4),
                ..Citation::default()
            }],
        );

        assert_eq!(
            app.reduce(Message::CitationClicked(0)),
            vec![Effect::JumpToPage(4)]
        );
    }
}
