//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! Shared data has designated writers: ingestion goes through
//! [`AppState::set_records`], the search query through
//! [`AppState::type_query`] / [`AppState::clear_query`], and selection through
//! the [`SelectionCoordinator`] signal. Query and page live together in a
//! [`TableQuery`], which returns to page 1 whenever the filtered set changes.

use crate::js_bridge;
use eqd_core::{
    search::Debouncer,
    selection::SelectionCoordinator,
    table::TableQuery,
    EarthquakeRecord, NumericField, PAGE_SIZE, SEARCH_DEBOUNCE_MS,
};
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Full record set from the last successful ingestion
    pub records: Signal<Vec<EarthquakeRecord>>,
    /// Whether the feed is still loading
    pub loading: Signal<bool>,
    /// Error message if ingestion failed
    pub error_msg: Signal<Option<String>>,
    /// Bumped by the Retry button to re-run ingestion
    pub reload: Signal<u32>,
    /// Selected and hovered record ids
    pub selection: Signal<SelectionCoordinator>,
    /// Search box contents, updated on every keystroke
    pub query_input: Signal<String>,
    pub debouncer: Signal<Debouncer<String>>,
    /// Debounced query the table is filtered by, and the current page
    pub table: Signal<TableQuery>,
    pub x_axis: Signal<NumericField>,
    pub y_axis: Signal<NumericField>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            records: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            reload: Signal::new(0),
            selection: Signal::new(SelectionCoordinator::new()),
            query_input: Signal::new(String::new()),
            debouncer: Signal::new(Debouncer::new()),
            table: Signal::new(TableQuery::new(PAGE_SIZE)),
            x_axis: Signal::new(NumericField::Magnitude),
            y_axis: Signal::new(NumericField::Depth),
        }
    }

    /// Replace the working record set after a successful ingestion.
    pub fn set_records(&mut self, records: Vec<EarthquakeRecord>) {
        log::info!("[EQD] state: {} records loaded", records.len());
        self.records.set(records);
        self.table.write().records_replaced();
    }

    /// Record a keystroke and run the search once input has been quiet for
    /// the debounce delay. Superseded keystrokes never apply.
    pub fn type_query(&mut self, value: String) {
        self.query_input.set(value.clone());
        let ticket = self.debouncer.write().push(value);
        let mut state = *self;
        spawn(async move {
            js_bridge::sleep_ms(SEARCH_DEBOUNCE_MS as i32).await;
            let settled = state.debouncer.write().settle(ticket);
            if let Some(query) = settled {
                state.apply_query(query);
            }
        });
    }

    /// Clear the search immediately, cancelling any pending keystroke.
    pub fn clear_query(&mut self) {
        self.query_input.set(String::new());
        let ticket = self.debouncer.write().push(String::new());
        let settled = self.debouncer.write().settle(ticket);
        if let Some(query) = settled {
            self.apply_query(query);
        }
    }

    fn apply_query(&mut self, query: String) {
        if self.table.peek().query() == query {
            return;
        }
        log::debug!("[EQD] state: search '{}'", query);
        self.table.write().apply_query(&query);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
