//! Quote calculation — `area × unit rate`, pure and deterministic

use crate::core::error::DomainError;
use crate::service::rate_table::RateTable;
use crate::service::service_type::ServiceType;

/// Outcome of a quote calculation.
///
/// `valid == false` (with amount 0) is the defined contract for a
/// non-positive or non-numeric area — it is user input to correct, not an
/// exceptional condition. Amounts carry full precision; two-decimal
/// rounding happens where the amount is formatted for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteResult {
    pub amount: f64,
    pub valid: bool,
}

impl QuoteResult {
    /// The result returned for any invalid area input.
    pub fn invalid() -> Self {
        Self {
            amount: 0.0,
            valid: false,
        }
    }
}

/// Compute a price estimate for `area` square feet of `service`.
///
/// A rate-table miss is a distinct failure from bad input: an unknown
/// service type is a configuration defect and must not be masked as
/// `valid: false`, which the caller reads as "the user typed a bad area".
pub fn calculate_quote(
    service: ServiceType,
    area: f64,
    rates: &RateTable,
) -> Result<QuoteResult, DomainError> {
    let rate = rates.rate_of(service)?;

    if area.is_nan() || area <= 0.0 {
        return Ok(QuoteResult::invalid());
    }

    Ok(QuoteResult {
        amount: area * rate,
        valid: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_is_area_times_rate() {
        let rates = RateTable::default_rates();
        for service in ServiceType::ALL {
            let rate = rates.rate_of(service).unwrap();
            for area in [1.0, 50.0, 123.45] {
                let result = calculate_quote(service, area, &rates).unwrap();
                assert!(result.valid);
                assert_eq!(result.amount, area * rate);
            }
        }
    }

    #[test]
    fn test_default_rates_price_fifty_sq_ft() {
        let rates = RateTable::default_rates();

        let residential = calculate_quote(ServiceType::Residential, 50.0, &rates).unwrap();
        assert_eq!(residential.amount, 10_000.0);

        let commercial = calculate_quote(ServiceType::Commercial, 50.0, &rates).unwrap();
        assert_eq!(commercial.amount, 50_000.0);
    }

    #[test]
    fn test_non_positive_area_is_invalid_not_error() {
        let rates = RateTable::default_rates();
        for service in ServiceType::ALL {
            for area in [0.0, -5.0, -0.001, f64::NAN] {
                let result = calculate_quote(service, area, &rates).unwrap();
                assert_eq!(result, QuoteResult::invalid());
            }
        }
    }

    #[test]
    fn test_unknown_service_is_an_error_not_invalid_input() {
        let partial = RateTable::from_entries([(ServiceType::Residential, 200.0)]).unwrap();
        let err = calculate_quote(ServiceType::Commercial, 50.0, &partial).unwrap_err();
        assert_eq!(err, DomainError::UnknownServiceType(ServiceType::Commercial));

        // The distinction holds even when the area is also bad.
        let err = calculate_quote(ServiceType::Commercial, -1.0, &partial).unwrap_err();
        assert_eq!(err, DomainError::UnknownServiceType(ServiceType::Commercial));
    }

    #[test]
    fn test_deterministic() {
        let rates = RateTable::default_rates();
        let first = calculate_quote(ServiceType::Residential, 33.3, &rates).unwrap();
        let second = calculate_quote(ServiceType::Residential, 33.3, &rates).unwrap();
        assert_eq!(first, second);
    }
}
