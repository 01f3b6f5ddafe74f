//! Presentation layer for tidyquote
//!
//! The "hosting page" made concrete: a console rendering of the quote page
//! that consumes the core's display instructions. Immediate instructions
//! apply inline; deferred ones go through the [`EffectScheduler`], which
//! executes them as fire-and-forget delayed tasks (last-write-wins on the
//! visual surface, matching the page's transition behavior).

pub mod cli;
pub mod console;
pub mod repl;
pub mod scheduler;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use console::page::ConsolePage;
pub use repl::PageRepl;
pub use scheduler::EffectScheduler;
