use std::time::{Duration, Instant};

/// A cancellable single-shot deadline for moving on to the next round.
///
/// At most one deadline is outstanding: arming replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct AutoAdvance {
    due: Option<Instant>,
}

impl AutoAdvance {
    pub fn arm(&mut self, delay: Duration, now: Instant) {
        self.due = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    pub fn due_at(&self) -> Option<Instant> {
        self.due
    }

    /// Consume the deadline if it has passed. Fires at most once per arm.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
