//! Shared filter state driving every dashboard view.

use crate::column::MeasureColumn;

/// Default forecast horizon in months.
pub const DEFAULT_FORECAST_STEPS: u32 = 12;

/// The user-controlled parameters shared by all dashboard views.
///
/// Single source of truth: views never keep their own copy, they derive
/// a [`crate::query::ViewQuery`] from this on every change. `region` and
/// `site` of `None` mean "no filter"; the empty-string sentinel the HTML
/// selects use for "All Regions"/"All Sites" never survives past
/// [`FilterState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub column: MeasureColumn,
    /// Number of months to forecast; always >= 1.
    pub forecast_steps: u32,
    pub region: Option<String>,
    pub site: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            column: MeasureColumn::Malinc,
            forecast_steps: DEFAULT_FORECAST_STEPS,
            region: None,
            site: None,
        }
    }
}

/// A partial update to [`FilterState`].
///
/// `None` fields leave the current value untouched. `region`/`site`
/// carry the raw select value; the empty string clears the filter.
/// `forecast_steps` carries the raw parsed entry, before clamping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub column: Option<MeasureColumn>,
    pub forecast_steps: Option<i64>,
    pub region: Option<String>,
    pub site: Option<String>,
}

impl FilterPatch {
    pub fn column(column: MeasureColumn) -> Self {
        Self {
            column: Some(column),
            ..Self::default()
        }
    }

    pub fn forecast_steps(steps: i64) -> Self {
        Self {
            forecast_steps: Some(steps),
            ..Self::default()
        }
    }

    pub fn region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Self::default()
        }
    }

    pub fn site(site: impl Into<String>) -> Self {
        Self {
            site: Some(site.into()),
            ..Self::default()
        }
    }
}

impl FilterState {
    /// Merge a partial update into the current state.
    ///
    /// Never fails: a non-positive (or out-of-range) `forecast_steps`
    /// keeps the previous valid value so the dashboard stays renderable.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(column) = patch.column {
            self.column = column;
        }
        if let Some(requested) = patch.forecast_steps {
            if let Ok(steps) = u32::try_from(requested) {
                if steps >= 1 {
                    self.forecast_steps = steps;
                }
            }
        }
        if let Some(region) = patch.region {
            self.region = non_empty(region);
        }
        if let Some(site) = patch.site {
            self.site = non_empty(site);
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_mount_state() {
        let filters = FilterState::default();
        assert_eq!(filters.column, MeasureColumn::Malinc);
        assert_eq!(filters.forecast_steps, 12);
        assert_eq!(filters.region, None);
        assert_eq!(filters.site, None);
    }

    #[test]
    fn apply_merges_only_patched_fields() {
        let mut filters = FilterState::default();
        filters.apply(FilterPatch::region("Central"));
        assert_eq!(filters.region.as_deref(), Some("Central"));
        assert_eq!(filters.column, MeasureColumn::Malinc);
        assert_eq!(filters.forecast_steps, 12);

        filters.apply(FilterPatch::column(MeasureColumn::Tpr));
        assert_eq!(filters.column, MeasureColumn::Tpr);
        assert_eq!(filters.region.as_deref(), Some("Central"));
    }

    #[test]
    fn empty_select_value_clears_the_filter() {
        let mut filters = FilterState::default();
        filters.apply(FilterPatch::site("Site001"));
        filters.apply(FilterPatch::site(""));
        assert_eq!(filters.site, None);
    }

    #[test]
    fn bad_forecast_steps_keep_previous_value() {
        let mut filters = FilterState::default();
        filters.apply(FilterPatch::forecast_steps(6));
        assert_eq!(filters.forecast_steps, 6);

        filters.apply(FilterPatch::forecast_steps(0));
        assert_eq!(filters.forecast_steps, 6);

        filters.apply(FilterPatch::forecast_steps(-3));
        assert_eq!(filters.forecast_steps, 6);
    }
}
