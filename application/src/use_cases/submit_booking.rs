//! Submit-booking use case — run the validation pipeline and instruct.

use crate::config::UiTimings;
use crate::ports::instruction::{HideTarget, Instruction, Status};
use tidyquote_domain::{BookingFormInput, ValidationOutcome, validate_booking};
use tracing::info;

/// Handle a booking-form submission.
///
/// Never errors: every outcome of the validator is a value, and each maps
/// to instructions. Only success resets the form and schedules the
/// feedback auto-hide; a failure leaves the user's input in place to fix.
pub fn submit_booking(input: &BookingFormInput, timings: UiTimings) -> Vec<Instruction> {
    match validate_booking(input) {
        ValidationOutcome::Success { message } => {
            info!("Booking accepted for {:?}", input.name.trim());
            vec![
                Instruction::ShowFormFeedback {
                    text: message,
                    status: Status::Success,
                },
                Instruction::ResetForm,
                Instruction::ScheduleHide {
                    target: HideTarget::FormFeedback,
                    delay_ms: timings.feedback_hide_ms,
                },
            ]
        }
        ValidationOutcome::Failure { message } => {
            info!("Booking rejected: {}", message);
            vec![Instruction::ShowFormFeedback {
                text: message,
                status: Status::Error,
            }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(name: &str, email: &str) -> Vec<Instruction> {
        submit_booking(&BookingFormInput::new(name, email), UiTimings::default())
    }

    #[test]
    fn test_success_shows_resets_and_schedules_hide() {
        let instructions = submit("Alice", "a@b.c");
        assert_eq!(
            instructions,
            vec![
                Instruction::ShowFormFeedback {
                    text: "Thank you, Alice! Your booking request has been received.".into(),
                    status: Status::Success,
                },
                Instruction::ResetForm,
                Instruction::ScheduleHide {
                    target: HideTarget::FormFeedback,
                    delay_ms: 6000,
                },
            ]
        );
    }

    #[test]
    fn test_failure_only_shows_feedback() {
        let instructions = submit("Al", "a@b.c");
        assert_eq!(
            instructions,
            vec![Instruction::ShowFormFeedback {
                text: "Error: Please enter your full name (at least 3 characters).".into(),
                status: Status::Error,
            }]
        );
    }

    #[test]
    fn test_name_rule_wins_over_email_rule() {
        let instructions = submit("", "a@b.c");
        match &instructions[0] {
            Instruction::ShowFormFeedback { text, .. } => {
                assert!(text.contains("full name"));
            }
            other => panic!("expected ShowFormFeedback, got {:?}", other),
        }
    }

    #[test]
    fn test_hide_delay_follows_timings() {
        let timings = UiTimings::default().with_feedback_hide_ms(1500);
        let instructions = submit_booking(&BookingFormInput::new("Alice", "a@b.c"), timings);
        assert!(instructions.contains(&Instruction::ScheduleHide {
            target: HideTarget::FormFeedback,
            delay_ms: 1500,
        }));
    }
}
