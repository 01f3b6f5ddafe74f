//! Domain error types

use crate::service::service_type::ServiceType;
use thiserror::Error;

/// Domain-level errors
///
/// User-correctable conditions (a bad area input, a failing booking rule)
/// are *not* errors — they are values returned by the calculator and the
/// validator. These variants cover defects: a tab label outside the known
/// set, or a known service type missing from a table that must cover it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown service type label: {0}")]
    InvalidServiceType(String),

    #[error("Service type not registered: {0}")]
    UnknownServiceType(ServiceType),

    #[error("Invalid rate for {service}: {rate} (must be positive and finite)")]
    InvalidRate { service: ServiceType, rate: f64 },
}

impl DomainError {
    /// Check whether this error points at a configuration defect (as
    /// opposed to bad event wiring from the host page).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownServiceType(_) | DomainError::InvalidRate { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_service_type_display() {
        let error = DomainError::InvalidServiceType("Industrial".to_string());
        assert_eq!(error.to_string(), "Unknown service type label: Industrial");
    }

    #[test]
    fn test_unknown_service_type_display() {
        let error = DomainError::UnknownServiceType(ServiceType::Commercial);
        assert_eq!(error.to_string(), "Service type not registered: Commercial");
    }

    #[test]
    fn test_is_configuration() {
        assert!(DomainError::UnknownServiceType(ServiceType::Residential).is_configuration());
        assert!(
            DomainError::InvalidRate {
                service: ServiceType::Residential,
                rate: -1.0
            }
            .is_configuration()
        );
        assert!(!DomainError::InvalidServiceType("x".to_string()).is_configuration());
    }
}
