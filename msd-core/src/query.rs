//! Deterministic request descriptors derived from the filter state.

use crate::filter::FilterState;

/// The visualization kinds, each depending on its own subset of the
/// filter state. Box and violin plots share [`ViewKind::Distribution`];
/// they are distinct loaders over the same query.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ViewKind {
    TimeSeries,
    Forecast,
    SummaryStats,
    Distribution,
    Heatmap,
}

/// A request descriptor: endpoint plus query parameters.
///
/// Parameters are pushed in a fixed declaration order, so equal filter
/// states produce byte-identical queries; loaders use equality as their
/// re-fetch key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub endpoint: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl ViewQuery {
    /// Relative URL with query string. Absent optional filters were
    /// never pushed, so no empty `key=` pairs appear.
    pub fn url(&self) -> String {
        if self.params.is_empty() {
            return self.endpoint.to_string();
        }
        let query = self
            .params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.endpoint, query)
    }
}

/// Build the request descriptor for one view kind from the current
/// filter state. Pure: equal inputs always yield equal queries.
pub fn build(kind: ViewKind, filters: &FilterState) -> ViewQuery {
    let mut params: Vec<(&'static str, String)> = Vec::new();
    let endpoint = match kind {
        ViewKind::TimeSeries => {
            push_filter(&mut params, "region", filters.region.as_deref());
            push_filter(&mut params, "site", filters.site.as_deref());
            "/data"
        }
        ViewKind::Forecast => {
            params.push(("column", filters.column.as_str().to_string()));
            params.push(("steps", filters.forecast_steps.to_string()));
            "/forecast"
        }
        ViewKind::SummaryStats => {
            params.push(("column", filters.column.as_str().to_string()));
            push_filter(&mut params, "region", filters.region.as_deref());
            push_filter(&mut params, "site", filters.site.as_deref());
            "/summary_stats"
        }
        ViewKind::Distribution => {
            params.push(("column", filters.column.as_str().to_string()));
            params.push(("group_by", "region".to_string()));
            "/box_data"
        }
        ViewKind::Heatmap => {
            params.push(("column", filters.column.as_str().to_string()));
            "/heatmap_data"
        }
    };
    ViewQuery { endpoint, params }
}

fn push_filter(
    params: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<&str>,
) {
    if let Some(value) = value {
        if !value.is_empty() {
            params.push((key, value.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::MeasureColumn;
    use crate::filter::FilterPatch;

    #[test]
    fn build_is_deterministic() {
        let filters = FilterState {
            column: MeasureColumn::Tpr,
            forecast_steps: 6,
            region: Some("Northern".to_string()),
            site: Some("Site002".to_string()),
        };
        for kind in [
            ViewKind::TimeSeries,
            ViewKind::Forecast,
            ViewKind::SummaryStats,
            ViewKind::Distribution,
            ViewKind::Heatmap,
        ] {
            assert_eq!(build(kind, &filters), build(kind, &filters));
            assert_eq!(build(kind, &filters).url(), build(kind, &filters).url());
        }
    }

    #[test]
    fn unfiltered_data_query_has_no_params() {
        let filters = FilterState::default();
        let query = build(ViewKind::TimeSeries, &filters);
        assert_eq!(query.endpoint, "/data");
        assert!(query.params.is_empty());
        assert_eq!(query.url(), "/data");
    }

    #[test]
    fn region_and_site_filters_appear_when_set() {
        let mut filters = FilterState::default();
        filters.apply(FilterPatch::region("Central"));
        filters.apply(FilterPatch::site("Site001"));

        let query = build(ViewKind::TimeSeries, &filters);
        assert_eq!(query.url(), "/data?region=Central&site=Site001");

        let query = build(ViewKind::SummaryStats, &filters);
        assert_eq!(
            query.url(),
            "/summary_stats?column=malinc&region=Central&site=Site001"
        );
    }

    #[test]
    fn forecast_query_carries_column_and_steps() {
        let mut filters = FilterState::default();
        filters.apply(FilterPatch::forecast_steps(24));
        let query = build(ViewKind::Forecast, &filters);
        assert_eq!(query.url(), "/forecast?column=malinc&steps=24");
    }

    #[test]
    fn distribution_query_is_grouped_by_region() {
        let query = build(ViewKind::Distribution, &FilterState::default());
        assert_eq!(query.url(), "/box_data?column=malinc&group_by=region");
    }

    #[test]
    fn forecast_steps_change_touches_only_the_forecast_query() {
        let before = FilterState::default();
        let mut after = before.clone();
        after.apply(FilterPatch::forecast_steps(6));

        assert_ne!(
            build(ViewKind::Forecast, &before),
            build(ViewKind::Forecast, &after)
        );
        for kind in [
            ViewKind::TimeSeries,
            ViewKind::SummaryStats,
            ViewKind::Distribution,
            ViewKind::Heatmap,
        ] {
            assert_eq!(build(kind, &before), build(kind, &after));
        }
    }
}
