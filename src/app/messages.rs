use crate::backend::{Insights, PodcastMeta, Recommendation};
use crate::geometry::Point;
use crate::viewer::RawViewerEvent;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI, the viewer host, and finished backend calls.
#[derive(Debug, Clone)]
pub enum Message {
    ViewerApisReady,
    ViewerEvent {
        event: RawViewerEvent,
        at: Instant,
    },
    CopyGesture {
        at: Instant,
    },
    CursorMoved(Point),
    PointerReleased,
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
        at: Instant,
    },
    DocumentSelected(String),
    PublicConfigLoaded(Option<String>),
    ShowActions,
    PanelHovered,
    ClosePanel,
    RecommendRequested,
    InsightsRequested,
    PodcastRequested,
    RecommendationClicked(usize),
    CitationClicked(usize),
    CloseInsights,
    RecommendationsLoaded {
        request_id: u64,
        result: Result<Vec<Recommendation>, String>,
    },
    InsightsLoaded {
        request_id: u64,
        result: Result<Insights, String>,
    },
    PodcastGenerated {
        request_id: u64,
        result: Result<PodcastMeta, String>,
    },
    Tick(Instant),
}
