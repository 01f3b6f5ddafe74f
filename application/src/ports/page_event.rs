//! Inbound events delivered by the hosting page.

/// A discrete user action, as delivered by the host's event dispatch.
///
/// Field values arrive raw (the tab label as a string, the area as the
/// text typed into the input): interpreting them is the core's job, and
/// the failure modes differ — an unknown tab label is a wiring defect,
/// an unparsable area is ordinary user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The user activated a service tab.
    TabActivated { service_label: String },
    /// The user clicked the quote button.
    QuoteRequested { area_input: String },
    /// The user submitted the booking form.
    BookingSubmitted { name: String, email: String },
}
