//! Domain layer for tidyquote
//!
//! This crate contains the core business logic of the service-quote page:
//! service types and their unit rates, the quote calculation, and the
//! booking-form validation pipeline. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Service type**: a category of offered service (Residential,
//!   Commercial), each with its own unit rate per square foot.
//! - **Quote**: `area × unit rate` for a service type. Computed by a pure
//!   function; invalid input is a value, not an error.
//! - **Booking validation**: an ordered, short-circuiting rule pipeline —
//!   only the first failing rule's message is surfaced.

pub mod booking;
pub mod core;
pub mod quote;
pub mod service;

// Re-export commonly used types
pub use booking::{
    form::BookingFormInput,
    validator::{ValidationOutcome, validate_booking},
};
pub use core::error::DomainError;
pub use quote::calculator::{QuoteResult, calculate_quote};
pub use service::{
    panel::{PanelCatalog, PanelContent},
    rate_table::RateTable,
    service_type::ServiceType,
};
