//! Outbound display instructions consumed by the presentation layer.
//!
//! Deferred effects are plain values: an instruction that should apply
//! later carries its own delay, and an external scheduler executes it.
//! That keeps the controller synchronous and lets tests assert on the
//! returned descriptors directly, without real timers.

use tidyquote_domain::{PanelContent, ServiceType};

/// Styling tag for a displayed message.
///
/// The presentation layer maps these to its own styling; the core never
/// manipulates presentation state (no class-name strings cross this port).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Neutral,
}

/// Which surfaced message a deferred hide applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideTarget {
    QuoteResult,
    FormFeedback,
}

/// Renderable content of one service panel: the descriptive copy plus the
/// rate line, already formatted to two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub service: ServiceType,
    pub headline: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub rate_line: String,
}

impl PanelView {
    pub fn new(service: ServiceType, content: &PanelContent, rate: f64) -> Self {
        Self {
            service,
            headline: content.headline.clone(),
            description: content.description.clone(),
            highlights: content.highlights.clone(),
            rate_line: format!("Rate: ${:.2} per sq ft", rate),
        }
    }
}

/// A display instruction for the presentation layer to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Render a service panel, after the fade-transition delay.
    RenderPanel { view: PanelView, apply_after_ms: u64 },
    /// Relabel the quote-request button.
    SetButtonLabel { text: String },
    /// Show the quote result line.
    ShowQuoteResult { text: String, status: Status },
    /// Hide the quote result line (a prior quote is stale).
    HideQuoteResult,
    /// Show the booking-form feedback line.
    ShowFormFeedback { text: String, status: Status },
    /// Clear the booking form's fields.
    ResetForm,
    /// Hide `target` after a delay.
    ScheduleHide { target: HideTarget, delay_ms: u64 },
}

impl Instruction {
    /// Whether this instruction applies later rather than inline.
    pub fn is_deferred(&self) -> bool {
        matches!(
            self,
            Instruction::RenderPanel { .. } | Instruction::ScheduleHide { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_view_formats_rate_to_two_decimals() {
        let content = PanelContent {
            headline: "Residential Cleaning".into(),
            description: "desc".into(),
            highlights: vec![],
        };
        let view = PanelView::new(ServiceType::Residential, &content, 200.0);
        assert_eq!(view.rate_line, "Rate: $200.00 per sq ft");

        let view = PanelView::new(ServiceType::Residential, &content, 99.999);
        assert_eq!(view.rate_line, "Rate: $100.00 per sq ft");
    }

    #[test]
    fn test_deferred_classification() {
        assert!(
            Instruction::ScheduleHide {
                target: HideTarget::FormFeedback,
                delay_ms: 6000
            }
            .is_deferred()
        );
        assert!(!Instruction::HideQuoteResult.is_deferred());
        assert!(
            !Instruction::ShowQuoteResult {
                text: "x".into(),
                status: Status::Neutral
            }
            .is_deferred()
        );
    }
}
