use crate::context::ContextQuery;

mod actions;
mod bridge;
mod core;
mod navigation;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    FetchPublicConfig,
    OpenViewer {
        document_id: String,
    },
    JumpToPage(u32),
    FetchRecommendations {
        request_id: u64,
        query: ContextQuery,
    },
    FetchInsights {
        request_id: u64,
        query: ContextQuery,
    },
    GeneratePodcast {
        request_id: u64,
        query: ContextQuery,
    },
}
