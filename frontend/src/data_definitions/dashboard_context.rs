//! State shared by every component of the dashboard page.

use common::{config::FrontEndConfig, error::DashboardError, filter_set::FilterSet, filter_store::FilterStore};
use dioxus::prelude::*;

use crate::data_definitions::translations::translate;

#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub store: Signal<FilterStore>,
    /// Last published filters.
    pub filters: ReadSignal<FilterSet>,
    /// Last published store revision; views refetch when it moves.
    pub revision: ReadSignal<u64>,
    pub config: ReadSignal<FrontEndConfig>,
}

impl DashboardContext {
    /// Runs one filter mutation. A rejected mutation leaves the filters
    /// untouched, a no-op one does not publish.
    pub fn update(&self, mutation: impl FnOnce(&mut FilterSet) -> Result<(), DashboardError>) -> Result<(), DashboardError> {
        let mut store = self.store;
        store.write().update_if_changed(mutation).map(|_| ())
    }

    /// Makes every view refetch with unchanged filters.
    pub fn invalidate(&self) {
        let mut store = self.store;
        store.write().invalidate();
    }

    pub fn t(&self, key: &str) -> String {
        translate(&self.config.read().current_language_code, key)
    }

    pub fn authenticated(&self) -> bool {
        self.config.read().authenticated_user
    }
}
