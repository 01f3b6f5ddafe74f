//! Deferred-effect scheduler.
//!
//! Executes deferred instructions as fire-and-forget delayed tasks. There
//! is no cancellation contract: switching tabs again does not revoke a
//! pending render, and a stale task applying late is tolerated because the
//! surface is last-write-wins. The only ordering guarantee is eventual
//! consistency with the latest selection.

use crate::console::page::ConsolePage;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tidyquote_application::Instruction;
use tokio::time::sleep;
use tracing::warn;

/// Applies instructions to a shared page, honoring deferred delays.
#[derive(Clone)]
pub struct EffectScheduler {
    page: Arc<Mutex<ConsolePage>>,
}

impl EffectScheduler {
    pub fn new(page: Arc<Mutex<ConsolePage>>) -> Self {
        Self { page }
    }

    /// Apply a batch: immediate instructions inline, deferred ones via
    /// spawned delayed tasks.
    pub fn apply_all(&self, instructions: Vec<Instruction>) {
        for instruction in instructions {
            if instruction.is_deferred() {
                self.spawn_deferred(instruction);
            } else {
                self.apply_now(&instruction);
            }
        }
    }

    /// Apply a batch with delays ignored (one-shot mode has no event loop
    /// to wait on). Deferred renders land inline; deferred hides are
    /// dropped — running a hide early would erase what was just shown.
    pub fn apply_all_immediately(&self, instructions: Vec<Instruction>) {
        for instruction in instructions {
            if matches!(instruction, Instruction::ScheduleHide { .. }) {
                continue;
            }
            self.apply_now(&instruction);
        }
    }

    fn apply_now(&self, instruction: &Instruction) {
        match self.page.lock() {
            Ok(mut page) => page.apply(instruction),
            Err(_) => warn!("Page surface poisoned; dropping {:?}", instruction),
        }
    }

    fn spawn_deferred(&self, instruction: Instruction) {
        let delay = match &instruction {
            Instruction::RenderPanel { apply_after_ms, .. } => *apply_after_ms,
            Instruction::ScheduleHide { delay_ms, .. } => *delay_ms,
            _ => 0,
        };
        let scheduler = self.clone();
        tokio::spawn(async move {
            sleep(Duration::from_millis(delay)).await;
            scheduler.apply_now(&instruction);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidyquote_application::{PageController, PageEvent, UiTimings};
    use tidyquote_domain::{PanelCatalog, RateTable};

    fn shared_page() -> Arc<Mutex<ConsolePage>> {
        Arc::new(Mutex::new(ConsolePage::new()))
    }

    fn controller_with_transition_ms(ms: u64) -> PageController {
        PageController::new(
            RateTable::default(),
            PanelCatalog::default(),
            UiTimings::default().with_panel_transition_ms(ms),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_immediate_instructions_apply_inline() {
        let page = shared_page();
        let scheduler = EffectScheduler::new(page.clone());

        let mut controller = PageController::with_defaults();
        let instructions = controller
            .dispatch(PageEvent::QuoteRequested {
                area_input: "50".into(),
            })
            .unwrap();
        scheduler.apply_all(instructions);

        assert!(page.lock().unwrap().quote_line().is_some());
    }

    #[tokio::test]
    async fn test_deferred_render_applies_after_delay() {
        let page = shared_page();
        let scheduler = EffectScheduler::new(page.clone());

        let mut controller = controller_with_transition_ms(10);
        let instructions = controller.initial_instructions().unwrap();
        scheduler.apply_all(instructions);

        // Not applied inline: the render waits out its transition delay.
        assert!(page.lock().unwrap().panel().is_none());

        sleep(Duration::from_millis(200)).await;
        assert_eq!(
            page.lock().unwrap().panel().unwrap().headline,
            "Residential Cleaning"
        );
    }

    #[tokio::test]
    async fn test_apply_all_immediately_skips_delays() {
        let page = shared_page();
        let scheduler = EffectScheduler::new(page.clone());

        let mut controller = PageController::with_defaults();
        let instructions = controller.initial_instructions().unwrap();
        scheduler.apply_all_immediately(instructions);

        assert!(page.lock().unwrap().panel().is_some());
    }

    #[tokio::test]
    async fn test_immediate_mode_keeps_booking_feedback_visible() {
        let page = shared_page();
        let scheduler = EffectScheduler::new(page.clone());

        let mut controller = PageController::with_defaults();
        let instructions = controller
            .dispatch(PageEvent::BookingSubmitted {
                name: "Alice".into(),
                email: "a@b.c".into(),
            })
            .unwrap();
        scheduler.apply_all_immediately(instructions);

        // The deferred auto-hide must not run early and erase the
        // confirmation before the surface is printed.
        let page = page.lock().unwrap();
        assert_eq!(
            page.feedback_line().unwrap().0,
            "Thank you, Alice! Your booking request has been received."
        );
        assert!(page.form().is_empty());
    }
}
