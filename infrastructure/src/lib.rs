//! Infrastructure layer for tidyquote
//!
//! Adapters between the outside world and the core: the TOML configuration
//! file format, its loader, and validated conversion into domain data.

pub mod config;

// Re-export commonly used types
pub use config::{
    file_config::{ConfigValidationError, FileConfig, FilePanelConfig, FileUiConfig},
    loader::ConfigLoader,
};
