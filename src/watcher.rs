use crate::config::TimingConfig;
use std::time::Duration;

/// What caused a recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    PageReady,
    Navigation { from: String, to: String },
    Refresh,
}

impl Trigger {
    /// How long to let the page settle before recomputing.
    pub fn settle_delay(&self, timing: &TimingConfig) -> Duration {
        let ms = match self {
            Trigger::PageReady => timing.ready_delay_ms,
            Trigger::Navigation { .. } => timing.navigation_delay_ms,
            Trigger::Refresh => timing.refresh_delay_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Detects single-page-app navigation by comparing successive locations.
#[derive(Debug, Clone)]
pub struct NavigationWatcher {
    location: String,
}

impl NavigationWatcher {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Record the current location; reports a navigation when it changed.
    pub fn poll(&mut self, location: &str) -> Option<Trigger> {
        if location == self.location {
            return None;
        }
        let from = std::mem::replace(&mut self.location, location.to_string());
        Some(Trigger::Navigation {
            from,
            to: location.to_string(),
        })
    }
}
