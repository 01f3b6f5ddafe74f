//! Service subdomain — the offered service types and their static data.
//!
//! - [`service_type::ServiceType`] — enumerated service categories
//! - [`rate_table::RateTable`] — unit rate per service type
//! - [`panel::PanelCatalog`] — descriptive panel content per service type

pub mod panel;
pub mod rate_table;
pub mod service_type;
