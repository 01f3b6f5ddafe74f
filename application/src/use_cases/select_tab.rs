//! Select-tab use case — the tab-selection state machine.

use crate::config::UiTimings;
use crate::ports::instruction::{Instruction, PanelView};
use crate::selection::SelectionState;
use tidyquote_domain::{DomainError, PanelCatalog, RateTable, ServiceType};
use tracing::{debug, info};

/// State machine over the finite set of service tabs.
///
/// Long-lived UI state: there is no terminal tab. The selection is the only
/// mutable field, written here and read by every other component.
#[derive(Debug, Clone)]
pub struct TabController {
    selection: SelectionState,
    timings: UiTimings,
}

impl TabController {
    pub fn new(initial: ServiceType, timings: UiTimings) -> Self {
        Self {
            selection: SelectionState::new(initial),
            timings,
        }
    }

    /// The active tab.
    pub fn current_tab(&self) -> ServiceType {
        self.selection.active()
    }

    /// Transition to the tab named by `label`.
    ///
    /// An unknown label fails with [`DomainError::InvalidServiceType`] and
    /// leaves the selection untouched. On success the state update is
    /// synchronous; the returned instructions are for the caller to apply —
    /// a deferred panel render (the delay is a fade transition, not a
    /// correctness concern), the button relabel, and a clear of any quote
    /// shown for the previous selection.
    pub fn select_tab(
        &mut self,
        label: &str,
        rates: &RateTable,
        panels: &PanelCatalog,
    ) -> Result<Vec<Instruction>, DomainError> {
        let requested: ServiceType = label.parse()?;

        // Resolve the panel data before committing the transition, so a
        // configuration defect leaves the selection consistent.
        let content = panels.content_for(requested)?;
        let rate = rates.rate_of(requested)?;

        let previous = self.selection.active();
        self.selection.set_active(requested);
        info!("Tab selected: {} (was {})", requested, previous);

        let view = PanelView::new(requested, content, rate);
        debug!("Panel render deferred by {}ms", self.timings.panel_transition_ms);

        Ok(vec![
            Instruction::RenderPanel {
                view,
                apply_after_ms: self.timings.panel_transition_ms,
            },
            Instruction::SetButtonLabel {
                text: format!("Get Quote for {}", requested),
            },
            Instruction::HideQuoteResult,
        ])
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(ServiceType::default(), UiTimings::default())
    }
}
