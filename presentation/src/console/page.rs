//! The console page surface — the instruction consumer.

use colored::Colorize;
use tidyquote_application::{HideTarget, Instruction, PanelView, Status};

/// Booking-form fields as currently typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
}

impl FormFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

/// Console stand-in for the page's visual surface.
///
/// [`apply`](Self::apply) performs an instruction's visual effect *now*;
/// honoring a deferred instruction's delay is the
/// [`EffectScheduler`](crate::scheduler::EffectScheduler)'s job. A stale
/// deferred render landing after a newer one simply overwrites — the
/// surface is last-write-wins by design.
#[derive(Debug, Default)]
pub struct ConsolePage {
    panel: Option<PanelView>,
    button_label: String,
    quote_line: Option<(String, Status)>,
    feedback_line: Option<(String, Status)>,
    form: FormFields,
}

impl ConsolePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one instruction's visual effect.
    pub fn apply(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::RenderPanel { view, .. } => self.panel = Some(view.clone()),
            Instruction::SetButtonLabel { text } => self.button_label = text.clone(),
            Instruction::ShowQuoteResult { text, status } => {
                self.quote_line = Some((text.clone(), *status));
            }
            Instruction::HideQuoteResult => self.quote_line = None,
            Instruction::ShowFormFeedback { text, status } => {
                self.feedback_line = Some((text.clone(), *status));
            }
            Instruction::ResetForm => self.form = FormFields::default(),
            Instruction::ScheduleHide { target, .. } => self.hide(*target),
        }
    }

    fn hide(&mut self, target: HideTarget) {
        match target {
            HideTarget::QuoteResult => self.quote_line = None,
            HideTarget::FormFeedback => self.feedback_line = None,
        }
    }

    pub fn set_form_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_form_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn quote_line(&self) -> Option<&(String, Status)> {
        self.quote_line.as_ref()
    }

    pub fn feedback_line(&self) -> Option<&(String, Status)> {
        self.feedback_line.as_ref()
    }

    pub fn panel(&self) -> Option<&PanelView> {
        self.panel.as_ref()
    }

    /// Render the whole surface for the terminal.
    pub fn render(&self) -> String {
        let mut out = String::new();

        match &self.panel {
            Some(view) => {
                out.push_str(&format!("{}\n", view.headline.bold()));
                out.push_str(&format!("{}\n", view.description));
                for highlight in &view.highlights {
                    out.push_str(&format!("  * {}\n", highlight));
                }
                out.push_str(&format!("{}\n", view.rate_line.yellow()));
            }
            None => out.push_str("(panel loading...)\n"),
        }

        if !self.button_label.is_empty() {
            out.push_str(&format!("\n[ {} ]\n", self.button_label.cyan()));
        }

        if let Some((text, status)) = &self.quote_line {
            out.push_str(&format!("{}\n", styled(text, *status)));
        }

        if !self.form.is_empty() {
            out.push_str(&format!(
                "\nBooking form: name={:?} email={:?}\n",
                self.form.name, self.form.email
            ));
        }

        if let Some((text, status)) = &self.feedback_line {
            out.push_str(&format!("{}\n", styled(text, *status)));
        }

        out
    }
}

/// Map a status tag to terminal styling.
fn styled(text: &str, status: Status) -> String {
    match status {
        Status::Success => text.green().to_string(),
        Status::Error => text.red().to_string(),
        Status::Neutral => text.normal().to_string(),
    }
}
