//! Booking subdomain — form input and the validation pipeline.

pub mod form;
pub mod validator;
