//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain data with
//! validation: a rate for an unknown service key, a non-positive rate, or
//! a table that doesn't cover every service type all abort startup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tidyquote_application::UiTimings;
use tidyquote_domain::{DomainError, PanelCatalog, PanelContent, RateTable, ServiceType};

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("[{section}] references unknown service type key: {key}")]
    UnknownServiceKey { section: &'static str, key: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Raw `[rates]` table from TOML — service key to unit rate.
fn default_rates() -> BTreeMap<String, f64> {
    ServiceType::ALL
        .iter()
        .map(|s| {
            let rate = RateTable::default_rates()
                .rate_of(*s)
                .unwrap_or_else(|_| unreachable!("built-in rates are complete"));
            (s.config_key().to_string(), rate)
        })
        .collect()
}

/// Raw `[ui]` timing configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUiConfig {
    /// Panel fade-transition delay in milliseconds
    pub panel_transition_ms: u64,
    /// Booking-feedback auto-hide delay in milliseconds
    pub feedback_hide_ms: u64,
}

impl Default for FileUiConfig {
    fn default() -> Self {
        let timings = UiTimings::default();
        Self {
            panel_transition_ms: timings.panel_transition_ms,
            feedback_hide_ms: timings.feedback_hide_ms,
        }
    }
}

/// Raw `[panels.<service>]` content override from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePanelConfig {
    pub headline: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// The full configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Unit rates per service key (currency per sq ft)
    pub rates: BTreeMap<String, f64>,
    /// UI timing overrides
    pub ui: FileUiConfig,
    /// Panel content overrides, keyed by service key
    pub panels: BTreeMap<String, FilePanelConfig>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            rates: default_rates(),
            ui: FileUiConfig::default(),
            panels: BTreeMap::new(),
        }
    }
}

impl FileConfig {
    /// Build the domain rate table, validating keys, values, and coverage.
    pub fn rate_table(&self) -> Result<RateTable, ConfigValidationError> {
        let mut entries = Vec::new();
        for (key, rate) in &self.rates {
            let service = parse_service_key("rates", key)?;
            entries.push((service, *rate));
        }
        let table = RateTable::from_entries(entries)?;
        table.ensure_complete()?;
        Ok(table)
    }

    /// Build the panel catalog: the built-in copy, with any `[panels.*]`
    /// overrides applied on top.
    pub fn panel_catalog(&self) -> Result<PanelCatalog, ConfigValidationError> {
        let mut entries: BTreeMap<ServiceType, PanelContent> = ServiceType::ALL
            .iter()
            .map(|s| {
                let content = PanelCatalog::default_catalog()
                    .content_for(*s)
                    .unwrap_or_else(|_| unreachable!("built-in catalog is complete"))
                    .clone();
                (*s, content)
            })
            .collect();

        for (key, panel) in &self.panels {
            let service = parse_service_key("panels", key)?;
            entries.insert(
                service,
                PanelContent {
                    headline: panel.headline.clone(),
                    description: panel.description.clone(),
                    highlights: panel.highlights.clone(),
                },
            );
        }

        let catalog = PanelCatalog::from_entries(entries);
        catalog.ensure_complete()?;
        Ok(catalog)
    }

    /// UI timings from the `[ui]` section.
    pub fn ui_timings(&self) -> UiTimings {
        UiTimings::default()
            .with_panel_transition_ms(self.ui.panel_transition_ms)
            .with_feedback_hide_ms(self.ui.feedback_hide_ms)
    }
}

fn parse_service_key(
    section: &'static str,
    key: &str,
) -> Result<ServiceType, ConfigValidationError> {
    key.parse()
        .map_err(|_| ConfigValidationError::UnknownServiceKey {
            section,
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_converts_cleanly() {
        let config = FileConfig::default();
        let table = config.rate_table().unwrap();
        assert_eq!(table, RateTable::default_rates());
        assert_eq!(config.panel_catalog().unwrap(), PanelCatalog::default());
        assert_eq!(config.ui_timings(), UiTimings::default());
    }

    #[test]
    fn test_deserializes_from_raw_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [rates]
            residential = 180.0
            commercial = 950.0

            [ui]
            panel_transition_ms = 150

            [panels.commercial]
            headline = "Office Cleaning"
            description = "Nightly office service."
            highlights = ["After-hours scheduling."]
            "#,
        )
        .unwrap();

        assert_eq!(config.rates["residential"], 180.0);
        assert_eq!(config.ui.panel_transition_ms, 150);
        // feedback_hide_ms falls back to its default
        assert_eq!(config.ui.feedback_hide_ms, 6000);
        assert_eq!(config.panels["commercial"].headline, "Office Cleaning");
    }

    #[test]
    fn test_unknown_rate_key_rejected() {
        let mut config = FileConfig::default();
        config.rates.insert("industrial".into(), 500.0);
        let err = config.rate_table().unwrap_err();
        assert!(matches!(
            err,
            ConfigValidationError::UnknownServiceKey {
                section: "rates",
                ..
            }
        ));
    }

    #[test]
    fn test_non_positive_rate_rejected() {
        let mut config = FileConfig::default();
        config.rates.insert("residential".into(), -10.0);
        let err = config.rate_table().unwrap_err();
        assert!(matches!(
            err,
            ConfigValidationError::Domain(DomainError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_missing_rate_rejected() {
        let mut config = FileConfig::default();
        config.rates.remove("commercial");
        let err = config.rate_table().unwrap_err();
        assert!(matches!(
            err,
            ConfigValidationError::Domain(DomainError::UnknownServiceType(
                ServiceType::Commercial
            ))
        ));
    }

    #[test]
    fn test_panel_override_applies_on_top_of_defaults() {
        let mut config = FileConfig::default();
        config.panels.insert(
            "residential".into(),
            FilePanelConfig {
                headline: "Home Cleaning".into(),
                description: "Custom copy.".into(),
                highlights: vec![],
            },
        );

        let catalog = config.panel_catalog().unwrap();
        assert_eq!(
            catalog
                .content_for(ServiceType::Residential)
                .unwrap()
                .headline,
            "Home Cleaning"
        );
        // The other panel keeps the built-in copy.
        assert_eq!(
            catalog
                .content_for(ServiceType::Commercial)
                .unwrap()
                .headline,
            "Commercial Cleaning"
        );
    }

    #[test]
    fn test_ui_overrides_flow_into_timings() {
        let mut config = FileConfig::default();
        config.ui.panel_transition_ms = 0;
        config.ui.feedback_hide_ms = 1000;
        let timings = config.ui_timings();
        assert_eq!(timings.panel_transition_ms, 0);
        assert_eq!(timings.feedback_hide_ms, 1000);
    }
}
