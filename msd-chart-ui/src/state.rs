//! Dashboard filter state managed via Dioxus context.
//!
//! `DashboardState` is provided with `use_context_provider`; controls
//! retrieve it with `use_context::<DashboardState>()` and mutate it only
//! through [`DashboardState::apply`], so the merge and clamping rules in
//! `msd-core` are the single write path.

use dioxus::prelude::*;

use msd_core::filter::{FilterPatch, FilterState};

/// Shared filter state for the dashboard app.
///
/// One signal holds the whole [`FilterState`]. Every view derives its
/// own query from a snapshot; a view whose query is unchanged by an
/// edit no-ops in its loader, so unrelated filter changes cost nothing.
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub filters: Signal<FilterState>,
}

impl DashboardState {
    /// Create a new DashboardState with default filter values.
    pub fn new() -> Self {
        Self {
            filters: Signal::new(FilterState::default()),
        }
    }

    /// Merge a partial filter update and notify all subscribed views.
    pub fn apply(&mut self, patch: FilterPatch) {
        self.filters.write().apply(patch);
    }
}
