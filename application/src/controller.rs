//! Page controller — routes inbound events to use cases.

use crate::config::UiTimings;
use crate::ports::instruction::Instruction;
use crate::ports::page_event::PageEvent;
use crate::use_cases::request_quote::handle_quote_request;
use crate::use_cases::select_tab::TabController;
use crate::use_cases::submit_booking::submit_booking;
use tidyquote_domain::{BookingFormInput, DomainError, PanelCatalog, RateTable, ServiceType};
use tracing::debug;

/// Owns the page's state and static data, and dispatches events.
///
/// The single entry point the host wires its event dispatch to. All
/// execution is synchronous; deferred effects leave as instruction values.
#[derive(Debug)]
pub struct PageController {
    rates: RateTable,
    panels: PanelCatalog,
    timings: UiTimings,
    tabs: TabController,
}

impl PageController {
    /// Create a controller over validated static data.
    ///
    /// Fails if the rate table or panel catalog is missing an entry for any
    /// reachable service type — that invariant is enforced here, at
    /// startup, rather than discovered mid-session.
    pub fn new(
        rates: RateTable,
        panels: PanelCatalog,
        timings: UiTimings,
    ) -> Result<Self, DomainError> {
        rates.ensure_complete()?;
        panels.ensure_complete()?;
        Ok(Self {
            rates,
            panels,
            timings,
            tabs: TabController::new(ServiceType::default(), timings),
        })
    }

    /// Controller over the built-in rates, copy, and timings.
    pub fn with_defaults() -> Self {
        Self::new(
            RateTable::default(),
            PanelCatalog::default(),
            UiTimings::default(),
        )
        .unwrap_or_else(|_| unreachable!("built-in tables are complete"))
    }

    /// The active service type.
    pub fn active_service(&self) -> ServiceType {
        self.tabs.current_tab()
    }

    /// Instructions that bring a fresh page to its initial state: the
    /// default tab selected and rendered, as the host applies on load.
    pub fn initial_instructions(&mut self) -> Result<Vec<Instruction>, DomainError> {
        self.tabs
            .select_tab(ServiceType::default().as_str(), &self.rates, &self.panels)
    }

    /// Dispatch one inbound event, returning the instructions to apply.
    pub fn dispatch(&mut self, event: PageEvent) -> Result<Vec<Instruction>, DomainError> {
        debug!("Dispatching {:?}", event);
        match event {
            PageEvent::TabActivated { service_label } => {
                self.tabs
                    .select_tab(&service_label, &self.rates, &self.panels)
            }
            PageEvent::QuoteRequested { area_input } => {
                handle_quote_request(&area_input, self.tabs.current_tab(), &self.rates)
            }
            PageEvent::BookingSubmitted { name, email } => Ok(submit_booking(
                &BookingFormInput::new(name, email),
                self.timings,
            )),
        }
    }
}
