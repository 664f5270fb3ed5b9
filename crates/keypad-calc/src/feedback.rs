//! Cosmetic press highlighting
//!
//! Buttons light up briefly when pressed. The tracker is advanced with
//! explicit elapsed time so frontends decide where the clock comes from and
//! tests stay deterministic.

use std::time::Duration;

use crate::config::DEFAULT_PRESS_FEEDBACK_MS;

/// Tracks which buttons are currently highlighted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressFeedback {
    duration: Duration,
    active: Vec<(String, Duration)>,
}

impl Default for PressFeedback {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_PRESS_FEEDBACK_MS))
    }
}

impl PressFeedback {
    /// Creates a tracker with the given highlight duration
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: Vec::new(),
        }
    }

    /// Creates a tracker from a millisecond duration
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Highlight duration
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Highlights a button, restarting its timer if already lit
    pub fn press(&mut self, id: impl Into<String>) {
        let id = id.into();
        if let Some(entry) = self.active.iter_mut().find(|(active, _)| *active == id) {
            entry.1 = self.duration;
        } else {
            self.active.push((id, self.duration));
        }
    }

    /// Advances the clock, returning ids whose highlight expired
    pub fn advance(&mut self, elapsed: Duration) -> Vec<String> {
        let mut expired = Vec::new();
        self.active.retain_mut(|(id, remaining)| {
            *remaining = remaining.saturating_sub(elapsed);
            if remaining.is_zero() {
                expired.push(std::mem::take(id));
                false
            } else {
                true
            }
        });
        expired
    }

    /// True while `id` is highlighted
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.iter().any(|(active, _)| active == id)
    }

    /// Ids currently highlighted, in press order
    pub fn active_ids(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(|(id, _)| id.as_str())
    }

    /// Drops every highlight without reporting them
    pub fn clear(&mut self) {
        self.active.clear();
    }
}
