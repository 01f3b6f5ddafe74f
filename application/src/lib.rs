//! Application layer for tidyquote
//!
//! This crate contains the page controller, its use cases, and the event /
//! instruction ports. It depends only on the domain layer.
//!
//! The contract with the presentation layer is value-based in both
//! directions: the host delivers a [`PageEvent`], the controller returns
//! [`Instruction`]s (including deferred ones carrying their own delay).
//! The core never touches presentation state directly.

pub mod config;
pub mod controller;
pub mod ports;
pub mod selection;
pub mod use_cases;

// Re-export commonly used types
pub use config::UiTimings;
pub use controller::PageController;
pub use ports::{
    instruction::{HideTarget, Instruction, PanelView, Status},
    page_event::PageEvent,
};
pub use selection::SelectionState;
pub use use_cases::{
    request_quote::handle_quote_request, select_tab::TabController,
    submit_booking::submit_booking,
};
