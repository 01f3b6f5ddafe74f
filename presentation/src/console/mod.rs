//! Console rendering of the quote page.

pub mod page;
