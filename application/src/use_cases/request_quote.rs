//! Request-quote use case — parse the area input and price it.

use crate::ports::instruction::{Instruction, Status};
use tidyquote_domain::{DomainError, RateTable, ServiceType, calculate_quote};
use tracing::{debug, info};

/// Message shown for an unparsable or non-positive area.
const INVALID_AREA_MESSAGE: &str = "Please enter a valid area (Sq Ft) greater than 0.";

/// Handle a click on the quote button.
///
/// `area_input` is the raw text of the area field; parse failure routes to
/// the same invalid-input message as a non-positive value. A rate-table
/// miss for `active` propagates as the configuration error it is.
pub fn handle_quote_request(
    area_input: &str,
    active: ServiceType,
    rates: &RateTable,
) -> Result<Vec<Instruction>, DomainError> {
    // NaN takes the same invalid-input path in the calculator as a failed
    // parse would, so both collapse to one gate.
    let area: f64 = area_input.trim().parse().unwrap_or(f64::NAN);
    debug!("Quote requested: input={:?} parsed={}", area_input, area);

    let result = calculate_quote(active, area, rates)?;

    let instruction = if result.valid {
        info!("Quote for {}: {:.2}", active, result.amount);
        Instruction::ShowQuoteResult {
            text: format!(
                "Estimated Quote: ${:.2} for {} service.",
                result.amount, active
            ),
            status: Status::Success,
        }
    } else {
        Instruction::ShowQuoteResult {
            text: INVALID_AREA_MESSAGE.to_string(),
            status: Status::Error,
        }
    };

    Ok(vec![instruction])
}
