//! Selected/hovered record identity shared by the chart and the table.

use crate::record::EarthquakeRecord;
use serde::{Deserialize, Serialize};

/// Snapshot of the current selection. Ids are references only: they may
/// name records that no longer exist after a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_id: Option<String>,
    pub hovered_id: Option<String>,
}

/// How a chart point or table row should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Selected,
    Hovered,
    None,
}

/// The only writer of [`SelectionState`]. Last write wins; ids are not
/// validated against the record set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCoordinator {
    state: SelectionState,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_selected(&mut self, id: Option<String>) {
        self.state.selected_id = id;
    }

    pub fn set_hovered(&mut self, id: Option<String>) {
        self.state.hovered_id = id;
    }

    pub fn snapshot(&self) -> SelectionState {
        self.state.clone()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Selection wins over hover when both name the same record.
    pub fn highlight(&self, id: &str) -> Highlight {
        if self.state.selected_id.as_deref() == Some(id) {
            Highlight::Selected
        } else if self.state.hovered_id.as_deref() == Some(id) {
            Highlight::Hovered
        } else {
            Highlight::None
        }
    }

    /// Ids that must stay visible in a downsampled chart: selected, then
    /// hovered, without duplicates.
    pub fn pinned_ids(&self) -> Vec<String> {
        let mut pinned = Vec::with_capacity(2);
        if let Some(selected) = &self.state.selected_id {
            pinned.push(selected.clone());
        }
        if let Some(hovered) = &self.state.hovered_id {
            if !pinned.contains(hovered) {
                pinned.push(hovered.clone());
            }
        }
        pinned
    }

    /// The selected record, or `None` when nothing is selected or the id is
    /// stale.
    pub fn resolve_selected<'a>(
        &self,
        records: &'a [EarthquakeRecord],
    ) -> Option<&'a EarthquakeRecord> {
        let id = self.state.selected_id.as_deref()?;
        records.iter().find(|r| r.id == id)
    }
}
