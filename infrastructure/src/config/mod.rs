//! Configuration loading and conversion.
//!
//! - [`file_config::FileConfig`] — raw TOML data types + validation
//! - [`loader::ConfigLoader`] — multi-source figment merging

pub mod file_config;
pub mod loader;
