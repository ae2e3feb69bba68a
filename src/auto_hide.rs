use std::time::{Duration, Instant};

/// Single idle deadline for the floating panel.
///
/// `poke` replaces any pending deadline, so at most one hide is ever pending.
/// The runtime polls with `fire` on each tick; a deadline fires once and is cleared.
#[derive(Debug, Clone)]
pub struct AutoHideTimer {
    idle: Duration,
    deadline: Option<Instant>,
}

impl AutoHideTimer {
    pub fn new(idle: Duration) -> Self {
        Self {
            idle,
            deadline: None,
        }
    }

    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.idle);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once, on the first poll at or past the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
