//! UI timing parameters — delays carried by deferred instructions.
//!
//! [`UiTimings`] groups the delays the controller attaches to deferred
//! instructions. They are presentation pacing, not correctness: state
//! updates stay synchronous, only the visual application is deferred.

use serde::{Deserialize, Serialize};

/// Delays attached to deferred display instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiTimings {
    /// Delay before a newly selected panel is rendered (fade transition).
    pub panel_transition_ms: u64,
    /// Delay before booking feedback is hidden again.
    pub feedback_hide_ms: u64,
}

impl Default for UiTimings {
    fn default() -> Self {
        Self {
            panel_transition_ms: 300,
            feedback_hide_ms: 6000,
        }
    }
}

impl UiTimings {
    pub fn with_panel_transition_ms(mut self, ms: u64) -> Self {
        self.panel_transition_ms = ms;
        self
    }

    pub fn with_feedback_hide_ms(mut self, ms: u64) -> Self {
        self.feedback_hide_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_timings() {
        let timings = UiTimings::default();
        assert_eq!(timings.panel_transition_ms, 300);
        assert_eq!(timings.feedback_hide_ms, 6000);
    }

    #[test]
    fn test_builder_overrides() {
        let timings = UiTimings::default()
            .with_panel_transition_ms(0)
            .with_feedback_hide_ms(100);
        assert_eq!(timings.panel_transition_ms, 0);
        assert_eq!(timings.feedback_hide_ms, 100);
    }
}
