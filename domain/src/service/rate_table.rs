//! Rate table — unit rate (currency per sq ft) for each service type

use crate::core::error::DomainError;
use crate::service::service_type::ServiceType;
use std::collections::HashMap;

/// Immutable mapping from service type to unit rate.
///
/// Populated once at startup and never mutated afterwards. A lookup for an
/// unregistered type fails with [`DomainError::UnknownServiceType`] — the
/// table never silently defaults to 0, because a missing rate is a
/// configuration defect, not a pricing decision.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: HashMap<ServiceType, f64>,
}

impl RateTable {
    /// Build a rate table from `(service, rate)` entries.
    ///
    /// Rejects non-positive or non-finite rates. Completeness (an entry for
    /// every reachable [`ServiceType`]) is checked separately via
    /// [`ensure_complete`](Self::ensure_complete) so partial tables can be
    /// assembled in tests.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (ServiceType, f64)>,
    ) -> Result<Self, DomainError> {
        let mut rates = HashMap::new();
        for (service, rate) in entries {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(DomainError::InvalidRate { service, rate });
            }
            rates.insert(service, rate);
        }
        Ok(Self { rates })
    }

    /// The rates the page ships with when no configuration overrides them.
    pub fn default_rates() -> Self {
        Self::from_entries([
            (ServiceType::Residential, 200.0),
            (ServiceType::Commercial, 1000.0),
        ])
        .unwrap_or_else(|_| unreachable!("built-in rates are positive"))
    }

    /// Look up the unit rate for a service type.
    pub fn rate_of(&self, service: ServiceType) -> Result<f64, DomainError> {
        self.rates
            .get(&service)
            .copied()
            .ok_or(DomainError::UnknownServiceType(service))
    }

    /// Verify that every known service type has a rate.
    pub fn ensure_complete(&self) -> Result<(), DomainError> {
        for service in ServiceType::ALL {
            if !self.rates.contains_key(&service) {
                return Err(DomainError::UnknownServiceType(service));
            }
        }
        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::default_rates()
    }
}
