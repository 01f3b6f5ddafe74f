//! Panel content — the descriptive copy shown for each service type

use crate::core::error::DomainError;
use crate::service::service_type::ServiceType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Descriptive content for one service panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelContent {
    /// Panel heading, e.g. "Residential Cleaning"
    pub headline: String,
    /// One-paragraph description of the service
    pub description: String,
    /// Bullet points listed under the description
    pub highlights: Vec<String>,
}

/// Immutable mapping from service type to its panel content.
///
/// Same lifecycle and failure contract as the
/// [`RateTable`](crate::service::rate_table::RateTable): built once at
/// startup, and a lookup for an unregistered type is a loud
/// [`DomainError::UnknownServiceType`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelCatalog {
    panels: HashMap<ServiceType, PanelContent>,
}

impl PanelCatalog {
    /// Build a catalog from `(service, content)` entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (ServiceType, PanelContent)>) -> Self {
        Self {
            panels: entries.into_iter().collect(),
        }
    }

    /// The copy the page ships with when no configuration overrides it.
    pub fn default_catalog() -> Self {
        Self::from_entries([
            (
                ServiceType::Residential,
                PanelContent {
                    headline: "Residential Cleaning".to_string(),
                    description: "Perfect for homes and apartments. Includes dusting, \
                                  vacuuming, kitchen and bathroom sanitization."
                        .to_string(),
                    highlights: vec![
                        "Deep cleaning options available.".to_string(),
                        "Weekly, Bi-weekly, or Monthly scheduling.".to_string(),
                    ],
                },
            ),
            (
                ServiceType::Commercial,
                PanelContent {
                    headline: "Commercial Cleaning".to_string(),
                    description: "Reliable service for offices, retail spaces, and small \
                                  businesses. Focus on high-traffic areas and cleanliness \
                                  compliance."
                        .to_string(),
                    highlights: vec![
                        "Custom nightly or weekend schedules.".to_string(),
                        "Eco-friendly supply commitment.".to_string(),
                    ],
                },
            ),
        ])
    }

    /// Look up the panel content for a service type.
    pub fn content_for(&self, service: ServiceType) -> Result<&PanelContent, DomainError> {
        self.panels
            .get(&service)
            .ok_or(DomainError::UnknownServiceType(service))
    }

    /// Verify that every known service type has panel content.
    pub fn ensure_complete(&self) -> Result<(), DomainError> {
        for service in ServiceType::ALL {
            if !self.panels.contains_key(&service) {
                return Err(DomainError::UnknownServiceType(service));
            }
        }
        Ok(())
    }
}

impl Default for PanelCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}
