use crate::backend::{Insights, PodcastMeta, Recommendation};

/// Loading/error/result triple for one backend operation.
///
/// Each dispatch gets a fresh request id; only the completion carrying the
/// latest id is applied, so a slow stale response cannot overwrite a newer one.
#[derive(Debug)]
pub struct OperationState<T> {
    pub(in crate::app) loading: bool,
    pub(in crate::app) error: Option<String>,
    pub(in crate::app) result: Option<T>,
    latest_request: u64,
}

impl<T> Default for OperationState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            result: None,
            latest_request: 0,
        }
    }
}

impl<T> OperationState<T> {
    pub(in crate::app) fn begin(&mut self) -> u64 {
        self.result = None;
        self.error = None;
        self.loading = true;
        self.latest_request += 1;
        self.latest_request
    }

    /// Record a failure that happened before any request went out.
    pub(in crate::app) fn fail_fast(&mut self, message: String) {
        self.latest_request += 1;
        self.result = None;
        self.loading = false;
        self.error = Some(message);
    }

    /// Apply a completion; returns false when it belongs to a superseded request.
    pub(in crate::app) fn finish(&mut self, request_id: u64, outcome: Result<T, String>) -> bool {
        if request_id != self.latest_request {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(value) => self.result = Some(value),
            Err(message) => self.error = Some(message),
        }
        true
    }
}

/// Recommendations keep the previous list on failure.
#[derive(Debug, Default)]
pub struct RecommendationsState {
    pub(in crate::app) items: Vec<Recommendation>,
    pub(in crate::app) loading: bool,
    latest_request: u64,
}

impl RecommendationsState {
    pub(in crate::app) fn begin(&mut self) -> u64 {
        self.loading = true;
        self.latest_request += 1;
        self.latest_request
    }

    pub(in crate::app) fn finish(
        &mut self,
        request_id: u64,
        outcome: Result<Vec<Recommendation>, String>,
    ) -> Option<Result<usize, String>> {
        if request_id != self.latest_request {
            return None;
        }
        self.loading = false;
        Some(outcome.map(|items| {
            self.items = items;
            self.items.len()
        }))
    }
}

#[derive(Debug, Default)]
pub struct InsightsState {
    pub(in crate::app) op: OperationState<Insights>,
    pub(in crate::app) visible: bool,
}

#[derive(Debug, Default)]
pub struct PodcastState {
    pub(in crate::app) op: OperationState<PodcastMeta>,
}

impl PodcastState {
    pub(in crate::app) fn is_ready(&self) -> bool {
        self.op.result.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_outcome() {
        let mut op: OperationState<u32> = OperationState::default();
        let first = op.begin();
        assert!(op.finish(first, Ok(7)));
        assert_eq!(op.result, Some(7));

        let second = op.begin();
        assert!(op.loading);
        assert_eq!(op.result, None);
        assert_eq!(op.error, None);
        assert!(op.finish(second, Err("boom".to_string())));
        assert!(!op.loading);
        assert_eq!(op.error.as_deref(), Some("boom"));
        assert_eq!(op.result, None);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut op: OperationState<&str> = OperationState::default();
        let slow = op.begin();
        let fast = op.begin();
        assert!(op.finish(fast, Ok("new")));
        assert!(!op.finish(slow, Ok("old")));
        assert_eq!(op.result, Some("new"));
    }

    #[test]
    fn fail_fast_invalidates_in_flight_request() {
        let mut op: OperationState<&str> = OperationState::default();
        let in_flight = op.begin();
        op.fail_fast("No context available".to_string());
        assert!(!op.finish(in_flight, Ok("late")));
        assert_eq!(op.error.as_deref(), Some("No context available"));
        assert!(!op.loading);
    }

    #[test]
    fn failed_recommendations_keep_stale_list() {
        let mut recs = RecommendationsState::default();
        let first = recs.begin();
        let item = Recommendation {
            document_id: Some("a.pdf".to_string()),
            page_number: Some(2),
            ..Recommendation::default()
        };
        assert_eq!(recs.finish(first, Ok(vec![item.clone()])), Some(Ok(1)));
        let second = recs.begin();
        assert_eq!(
            recs.finish(second, Err("offline".to_string())),
            Some(Err("offline".to_string()))
        );
        assert_eq!(recs.items, vec![item]);
        assert!(!recs.loading);
    }
}
