//! Selection state — the single mutable piece of page state.

use tidyquote_domain::ServiceType;

/// The currently selected service type.
///
/// Created at page initialization and owned by the
/// [`TabController`](crate::use_cases::select_tab::TabController) — not an
/// ambient global. Single writer (tab selection), read by everything else
/// through [`active`](Self::active).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    active: ServiceType,
}

impl SelectionState {
    pub fn new(initial: ServiceType) -> Self {
        Self { active: initial }
    }

    /// The active service type.
    pub fn active(&self) -> ServiceType {
        self.active
    }

    pub(crate) fn set_active(&mut self, service: ServiceType) {
        self.active = service;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(ServiceType::default())
    }
}
