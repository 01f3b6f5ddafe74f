//! ServiceType value object representing an offered service category

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Offered service categories (Value Object)
///
/// The finite set of tabs the page can show. Every member must have a rate
/// in the [`RateTable`](crate::service::rate_table::RateTable) and content
/// in the [`PanelCatalog`](crate::service::panel::PanelCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Residential,
    Commercial,
}

impl ServiceType {
    /// All known service types, in tab order.
    pub const ALL: [ServiceType; 2] = [ServiceType::Residential, ServiceType::Commercial];

    /// Get the display identifier for this service type
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Residential => "Residential",
            ServiceType::Commercial => "Commercial",
        }
    }

    /// Lowercase key used in configuration files
    pub fn config_key(&self) -> &'static str {
        match self {
            ServiceType::Residential => "residential",
            ServiceType::Commercial => "commercial",
        }
    }
}

impl Default for ServiceType {
    /// Returns the tab the page opens on
    fn default() -> Self {
        ServiceType::Residential
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "residential" => Ok(ServiceType::Residential),
            "commercial" => Ok(ServiceType::Commercial),
            _ => Err(DomainError::InvalidServiceType(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_parse() {
        for service in ServiceType::ALL {
            let parsed: ServiceType = service.to_string().parse().unwrap();
            assert_eq!(parsed, service);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "RESIDENTIAL".parse::<ServiceType>().unwrap(),
            ServiceType::Residential
        );
        assert_eq!(
            "  commercial ".parse::<ServiceType>().unwrap(),
            ServiceType::Commercial
        );
    }

    #[test]
    fn test_parse_unknown_label_fails() {
        let err = "Industrial".parse::<ServiceType>().unwrap_err();
        assert_eq!(err, DomainError::InvalidServiceType("Industrial".into()));
    }

    #[test]
    fn test_default_is_residential() {
        assert_eq!(ServiceType::default(), ServiceType::Residential);
    }
}
