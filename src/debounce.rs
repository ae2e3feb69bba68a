use std::time::{Duration, Instant};

/// Suppresses the same selection reported twice for one gesture.
///
/// The viewer and the native copy path can both report an identical selection;
/// only the first report inside the window is accepted.
#[derive(Debug, Clone)]
pub struct SelectionDebouncer {
    window: Duration,
    last: Option<(String, Instant)>,
}

impl SelectionDebouncer {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Returns true when `text` duplicates the last accepted text within the window.
    /// Accepted text becomes the new reference pair.
    pub fn should_suppress(&mut self, text: &str, now: Instant) -> bool {
        if let Some((last_text, last_at)) = &self.last {
            if last_text == text && now.saturating_duration_since(*last_at) < self.window {
                return true;
            }
        }
        self.last = Some((text.to_string(), now));
        false
    }

    /// Forget the last accepted selection so the next report is always accepted.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
