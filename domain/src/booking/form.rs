//! Booking form input value object

/// Raw booking-form fields, read at submission time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingFormInput {
    pub name: String,
    pub email: String,
}

impl BookingFormInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
