//! Use cases — one module per page operation.

pub mod request_quote;
pub mod select_tab;
pub mod submit_booking;
