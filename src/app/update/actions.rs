use super::super::state::App;
use super::Effect;
use crate::backend::{Insights, PodcastMeta, Recommendation};
use crate::context::ContextQuery;
use std::time::Instant;
use tracing::{debug, error, info, warn};

impl App {
    fn current_query(&self) -> Result<ContextQuery, crate::context::NoContext> {
        ContextQuery::try_from(self.resolved_context())
    }

    pub(super) fn dispatch_recommendations(
        &mut self,
        query: ContextQuery,
        effects: &mut Vec<Effect>,
    ) {
        let request_id = self.recommendations.begin();
        debug!(request_id, ?query, "Requesting recommendations");
        effects.push(Effect::FetchRecommendations { request_id, query });
    }

    pub(super) fn handle_recommend_requested(&mut self, effects: &mut Vec<Effect>) {
        self.bridge.panel.poke(Instant::now());
        match self.current_query() {
            Ok(query) => self.dispatch_recommendations(query, effects),
            Err(err) => debug!("Recommend skipped: {err}"),
        }
    }

    pub(super) fn handle_insights_requested(&mut self, effects: &mut Vec<Effect>) {
        self.bridge.panel.poke(Instant::now());
        match self.current_query() {
            Ok(query) => {
                let request_id = self.insights.op.begin();
                info!(request_id, ?query, "Requesting insights");
                effects.push(Effect::FetchInsights { request_id, query });
            }
            Err(err) => {
                warn!("Insights unavailable: {err}");
                self.insights.op.fail_fast(err.to_string());
                self.insights.visible = true;
            }
        }
    }

    pub(super) fn handle_podcast_requested(&mut self, effects: &mut Vec<Effect>) {
        self.bridge.panel.poke(Instant::now());
        match self.current_query() {
            Ok(query) => {
                let request_id = self.podcast.op.begin();
                info!(request_id, ?query, "Generating podcast");
                effects.push(Effect::GeneratePodcast { request_id, query });
            }
            Err(err) => {
                warn!("Podcast unavailable: {err}");
                self.podcast.op.fail_fast(err.to_string());
            }
        }
    }

    pub(super) fn handle_recommendations_loaded(
        &mut self,
        request_id: u64,
        result: Result<Vec<Recommendation>, String>,
    ) {
        match self.recommendations.finish(request_id, result) {
            Some(Ok(count)) => debug!(request_id, count, "Recommendations loaded"),
            Some(Err(err)) => error!(request_id, "Recommendations failed: {err}"),
            None => debug!(request_id, "Discarding stale recommendations"),
        }
    }

    pub(super) fn handle_insights_loaded(
        &mut self,
        request_id: u64,
        result: Result<Insights, String>,
    ) {
        if let Err(err) = &result {
            error!(request_id, "Insights failed: {err}");
        }
        if self.insights.op.finish(request_id, result) {
            self.insights.visible = true;
        } else {
            debug!(request_id, "Discarding stale insights");
        }
    }

    pub(super) fn handle_podcast_generated(
        &mut self,
        request_id: u64,
        result: Result<PodcastMeta, String>,
    ) {
        if let Err(err) = &result {
            error!(request_id, "Podcast generation failed: {err}");
        }
        if !self.podcast.op.finish(request_id, result) {
            debug!(request_id, "Discarding stale podcast");
        } else if let Some(meta) = &self.podcast.op.result {
            info!(request_id, url = %meta.url, "Podcast ready");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::app::testing::build_test_app;
    use crate::context::{Selection, SelectionOrigin, ViewerContext};

    fn on_page(app: &mut App, document_id: &str, page: u32) {
        app.viewer = Some(ViewerContext {
            document_id: document_id.to_string(),
            page_number: Some(page),
        });
    }

    #[test]
    fn insights_without_selection_use_page_locator() {
        let mut app = build_test_app();
        on_page(&mut app, "bio101.pdf", 3);

        let effects = app.reduce(Message::InsightsRequested);
        assert_eq!(
            effects,
            vec![Effect::FetchInsights {
                request_id: 1,
                query: ContextQuery::Locator {
                    document_id: "bio101.pdf".to_string(),
                    page_number: 3
                }
            }]
        );
        assert!(app.insights.op.loading);
        assert!(!app.insights.visible);
    }

    #[test]
    fn selection_takes_priority_for_actions() {
        let mut app = build_test_app();
        on_page(&mut app, "bio101.pdf", 3);
        app.bridge.selection =
            Selection::new("mitosis", Instant::now(), SelectionOrigin::NativeCopy);

        let effects = app.reduce(Message::PodcastRequested);
        assert!(matches!(
            effects.as_slice(),
            [Effect::GeneratePodcast {
                query: ContextQuery::Text { text },
                ..
            }] if text == "mitosis"
        ));
    }

    #[test]
    fn insights_failure_still_opens_modal() {
        let mut app = build_test_app();
        on_page(&mut app, "bio101.pdf", 3);
        app.reduce(Message::InsightsRequested);

        app.reduce(Message::InsightsLoaded {
            request_id: 1,
            result: Err("rate limited".to_string()),
        });
        assert!(!app.insights.op.loading);
        assert_eq!(app.insights.op.error.as_deref(), Some("rate limited"));
        assert!(app.insights.op.result.is_none());
        assert!(app.insights.visible);
    }

    #[test]
    fn insights_success_opens_modal_with_result() {
        let mut app = build_test_app();
        on_page(&mut app, "bio101.pdf", 1);
        app.reduce(Message::InsightsRequested);
        let insights = Insights {
            key_insights: vec!["ATP is produced in mitochondria".to_string()],
            ..Insights::default()
        };
        app.reduce(Message::InsightsLoaded {
            request_id: 1,
            result: Ok(insights.clone()),
        });
        assert_eq!(app.insights.op.result.as_ref(), Some(&insights));
        assert!(app.insights.visible);

        app.reduce(Message::CloseInsights);
        assert!(!app.insights.visible);
    }

    #[test]
    fn no_context_fails_fast_without_backend_call() {
        let mut app = build_test_app();

        assert!(app.reduce(Message::InsightsRequested).is_empty());
        assert_eq!(app.insights.op.error.as_deref(), Some("No context available"));
        assert!(!app.insights.op.loading);
        assert!(app.insights.visible);

        assert!(app.reduce(Message::PodcastRequested).is_empty());
        assert_eq!(app.podcast.op.error.as_deref(), Some("No context available"));

        assert!(app.reduce(Message::RecommendRequested).is_empty());
        assert!(!app.recommendations.loading);
    }

    #[test]
    fn stale_podcast_completion_is_ignored() {
        let mut app = build_test_app();
        on_page(&mut app, "bio101.pdf", 2);
        app.reduce(Message::PodcastRequested);
        app.reduce(Message::PodcastRequested);

        app.reduce(Message::PodcastGenerated {
            request_id: 1,
            result: Ok(PodcastMeta {
                url: "/audio/old.mp3".to_string(),
                ..PodcastMeta::default()
            }),
        });
        assert!(app.podcast.op.loading);
        assert!(!app.podcast.is_ready());

        app.reduce(Message::PodcastGenerated {
            request_id: 2,
            result: Ok(PodcastMeta {
                url: "/audio/new.mp3".to_string(),
                ..PodcastMeta::default()
            }),
        });
        assert!(app.podcast.is_ready());
        assert_eq!(
            app.podcast.op.result.as_ref().map(|meta| meta.url.as_str()),
            Some("/audio/new.mp3")
        );
    }

    #[test]
    fn recommendation_failure_keeps_previous_list() {
        let mut app = build_test_app();
        on_page(&mut app, "bio101.pdf", 2);
        app.reduce(Message::RecommendRequested);
        let item = Recommendation {
            document_id: Some("chem.pdf".to_string()),
            page_number: Some(4),
            ..Recommendation::default()
        };
        app.reduce(Message::RecommendationsLoaded {
            request_id: 1,
            result: Ok(vec![item.clone()]),
        });

        app.reduce(Message::RecommendRequested);
        assert!(app.recommendations.loading);
        app.reduce(Message::RecommendationsLoaded {
            request_id: 2,
            result: Err("backend down".to_string()),
        });
        assert!(!app.recommendations.loading);
        assert_eq!(app.recommendations.items, vec![item]);
    }
}
