//! Booking-form validation — ordered, short-circuiting rule pipeline

use crate::booking::form::BookingFormInput;

/// Minimum trimmed length for the name field.
const MIN_NAME_LEN: usize = 3;

/// Outcome of validating a booking submission.
///
/// Exactly one rule's message is surfaced: the first failure wins, and
/// later rules are not evaluated. Validation never errors — malformed
/// input is an ordinary `Failure` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Success { message: String },
    Failure { message: String },
}

impl ValidationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ValidationOutcome::Success { message } | ValidationOutcome::Failure { message } => {
                message
            }
        }
    }
}

/// Validate a booking submission.
///
/// Rules, in order:
/// 1. trimmed name is at least 3 characters;
/// 2. trimmed email contains both `@` and `.` — a deliberately weak
///    substring check, not RFC validation. Downstream messaging depends on
///    this exact pass/fail boundary, so it must not be tightened.
pub fn validate_booking(input: &BookingFormInput) -> ValidationOutcome {
    let name = input.name.trim();
    let email = input.email.trim();

    if name.chars().count() < MIN_NAME_LEN {
        return ValidationOutcome::Failure {
            message: "Error: Please enter your full name (at least 3 characters).".to_string(),
        };
    }

    if !email.contains('@') || !email.contains('.') {
        return ValidationOutcome::Failure {
            message: "Error: Please enter a valid email address format.".to_string(),
        };
    }

    ValidationOutcome::Success {
        message: format!("Thank you, {}! Your booking request has been received.", name),
    }
}
