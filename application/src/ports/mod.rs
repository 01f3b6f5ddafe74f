//! Ports between the core and the hosting page.
//!
//! - [`page_event::PageEvent`] — inbound: what the user did
//! - [`instruction::Instruction`] — outbound: what the page should display

pub mod instruction;
pub mod page_event;
