//! The five view transformers: raw endpoint JSON in, chart shape out.
//!
//! Each transformer is total over well-formed input and explicit about
//! malformed input: a structural mismatch is a [`FetchError::Shape`], a
//! backend-reported error field is a [`FetchError::Backend`]. Nothing
//! panics; a failed transform fails only its own view.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use msd_core::column::MeasureColumn;
use msd_core::error::FetchError;
use msd_core::record::SurveillanceRecord;
use msd_core::response;

use crate::shapes::{ForecastSeries, GroupDistribution, HeatmapData, SummaryStats, TimeSeries};

/// Date format of forecast keys ("YYYY-MM-DD").
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `/data` payload into records.
///
/// The record array is column-independent: the time-series loader
/// stores these once per region/site query, and the column-specific
/// series is derived from them by [`to_time_series`].
pub fn parse_records(payload: &Value) -> Result<Vec<SurveillanceRecord>, FetchError> {
    serde_json::from_value(payload.clone())
        .map_err(|err| FetchError::Shape(format!("/data payload is not a record array: {err}")))
}

/// Reshape records into parallel x/y series for the selected column.
///
/// Records whose selected column (or observation month) is null are
/// excluded, never coerced to zero. Input order is preserved; the
/// backend emits rows chronologically.
pub fn to_time_series(records: &[SurveillanceRecord], column: MeasureColumn) -> TimeSeries {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for record in records {
        if let (Some(date), Some(value)) = (record.monthyear, record.value(column)) {
            x.push(date);
            y.push(value);
        }
    }
    TimeSeries { x, y }
}

/// Reshape a `/forecast` payload into a series.
///
/// The backend keys forecast points by date in chronological order;
/// that iteration order becomes the series order, with no re-sort.
pub fn to_forecast(payload: &Value) -> Result<ForecastSeries, FetchError> {
    if let Some(message) = response::error_message(payload) {
        return Err(FetchError::Backend(message));
    }
    let forecast = payload
        .get("forecast")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            FetchError::Shape("/forecast payload has no forecast mapping".to_string())
        })?;
    let mut x = Vec::with_capacity(forecast.len());
    let mut y = Vec::with_capacity(forecast.len());
    for (date, value) in forecast {
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|err| FetchError::Shape(format!("bad forecast date {date:?}: {err}")))?;
        let value = value.as_f64().ok_or_else(|| {
            FetchError::Shape(format!("non-numeric forecast value for {date}"))
        })?;
        x.push(date);
        y.push(value);
    }
    Ok(ForecastSeries { x, y })
}

/// Validate and pass through a `/summary_stats` payload.
///
/// An `error` field is surfaced as a failed view rather than a ready
/// one with partial numbers.
pub fn to_summary_stats(payload: &Value) -> Result<SummaryStats, FetchError> {
    if let Some(message) = response::error_message(payload) {
        return Err(FetchError::Backend(message));
    }
    serde_json::from_value(payload.clone())
        .map_err(|err| FetchError::Shape(format!("/summary_stats payload malformed: {err}")))
}

/// Reshape a `/box_data` payload into per-group distributions.
///
/// The backend has already grouped observations by region; each row
/// carries the group label plus the raw value list for `column`. No
/// client-side regrouping happens here.
pub fn to_grouped_distribution(
    payload: &Value,
    column: MeasureColumn,
) -> Result<Vec<GroupDistribution>, FetchError> {
    let rows = payload.as_array().ok_or_else(|| {
        FetchError::Shape("/box_data payload is not an array".to_string())
    })?;
    let mut groups = Vec::with_capacity(rows.len());
    for row in rows {
        let label = row
            .get("region")
            .and_then(Value::as_str)
            .ok_or_else(|| FetchError::Shape("/box_data row has no region label".to_string()))?
            .to_string();
        let raw = row.get(column.as_str()).and_then(Value::as_array).ok_or_else(|| {
            FetchError::Shape(format!(
                "/box_data row for {label} has no {} values",
                column.as_str()
            ))
        })?;
        let mut values = Vec::with_capacity(raw.len());
        for value in raw {
            values.push(value.as_f64().ok_or_else(|| {
                FetchError::Shape(format!(
                    "non-numeric {} value in group {label}",
                    column.as_str()
                ))
            })?);
        }
        groups.push(GroupDistribution { label, values });
    }
    Ok(groups)
}

#[derive(Deserialize)]
struct RawHeatmap {
    groups: Vec<String>,
    months: Vec<u32>,
    matrix: Vec<Vec<f64>>,
}

/// Reshape and validate a `/heatmap_data` payload.
///
/// The matrix must be exactly groups-by-months; a mismatch fails the
/// view with a descriptive message instead of handing the chart a
/// ragged matrix.
pub fn to_heatmap(payload: &Value) -> Result<HeatmapData, FetchError> {
    let raw: RawHeatmap = serde_json::from_value(payload.clone())
        .map_err(|err| FetchError::Shape(format!("/heatmap_data payload malformed: {err}")))?;
    if raw.matrix.len() != raw.groups.len() {
        return Err(FetchError::Shape(format!(
            "heatmap matrix has {} rows for {} groups",
            raw.matrix.len(),
            raw.groups.len()
        )));
    }
    for (group, row) in raw.groups.iter().zip(&raw.matrix) {
        if row.len() != raw.months.len() {
            return Err(FetchError::Shape(format!(
                "heatmap row for {group} has {} columns, expected {}",
                row.len(),
                raw.months.len()
            )));
        }
    }
    Ok(HeatmapData {
        rows: raw.groups,
        cols: raw.months.iter().map(|m| format!("Month {m}")).collect(),
        matrix: raw.matrix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn time_series_excludes_null_values() {
        let records = parse_records(&json!([
            { "monthyear": "2020-01-01", "region": "Central", "malinc": 12.0 },
            { "monthyear": "2020-02-01", "region": "Central", "malinc": null },
        ]))
        .unwrap();
        let series = to_time_series(&records, MeasureColumn::Malinc);
        assert_eq!(series.x, vec![date("2020-01-01")]);
        assert_eq!(series.y, vec![12.0]);
    }

    #[test]
    fn time_series_preserves_input_order() {
        let records = parse_records(&json!([
            { "monthyear": "2020-03-01", "malinc": 3.0 },
            { "monthyear": "2020-01-01", "malinc": 1.0 },
            { "monthyear": "2020-02-01", "malinc": null },
            { "monthyear": "2020-04-01", "malinc": 4.0 },
        ]))
        .unwrap();
        let series = to_time_series(&records, MeasureColumn::Malinc);
        assert_eq!(series.x.len(), series.y.len());
        assert_eq!(
            series.x,
            vec![date("2020-03-01"), date("2020-01-01"), date("2020-04-01")]
        );
        assert_eq!(series.y, vec![3.0, 1.0, 4.0]);
    }

    #[test]
    fn time_series_excludes_undated_records() {
        let records = parse_records(&json!([
            { "monthyear": null, "malinc": 5.0 },
            { "monthyear": "2020-01-01", "malinc": 7.0 },
        ]))
        .unwrap();
        let series = to_time_series(&records, MeasureColumn::Malinc);
        assert_eq!(series.y, vec![7.0]);
    }

    #[test]
    fn same_records_serve_every_column() {
        let records = parse_records(&json!([
            { "monthyear": "2020-01-01", "malinc": 12.0, "TPR": 0.4 },
            { "monthyear": "2020-02-01", "malinc": null, "TPR": 0.5 },
        ]))
        .unwrap();
        assert_eq!(to_time_series(&records, MeasureColumn::Malinc).y, vec![12.0]);
        assert_eq!(to_time_series(&records, MeasureColumn::Tpr).y, vec![0.4, 0.5]);
    }

    #[test]
    fn non_array_data_payload_is_malformed() {
        let err = parse_records(&json!({"rows": []})).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
    }

    #[test]
    fn forecast_preserves_backend_order() {
        // Deliberately not in key-sorted order: the series must follow
        // the mapping's own iteration order, not a re-sort.
        let payload = json!({
            "column": "malinc",
            "steps": 3,
            "forecast": {
                "2021-02-01": 5.0,
                "2021-01-01": 3.0,
                "2021-03-01": 8.0,
            }
        });
        let series = to_forecast(&payload).unwrap();
        assert_eq!(
            series.x,
            vec![date("2021-02-01"), date("2021-01-01"), date("2021-03-01")]
        );
        assert_eq!(series.y, vec![5.0, 3.0, 8.0]);
    }

    #[test]
    fn forecast_error_field_fails_the_view() {
        let payload = json!({ "error": "Model fitting failed: singular matrix" });
        let err = to_forecast(&payload).unwrap_err();
        assert_eq!(
            err,
            FetchError::Backend("Model fitting failed: singular matrix".to_string())
        );
    }

    #[test]
    fn forecast_without_mapping_is_malformed() {
        let err = to_forecast(&json!({ "column": "malinc" })).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
    }

    #[test]
    fn summary_stats_pass_through() {
        let payload = json!({
            "column": "malinc",
            "region_filter": null,
            "site_filter": null,
            "count": 240,
            "mean": 11.2,
            "median": 10.5,
            "min": 0.4,
            "max": 61.0,
            "std": 7.9,
        });
        let stats = to_summary_stats(&payload).unwrap();
        assert_eq!(stats.column, "malinc");
        assert_eq!(stats.count, 240);
        assert_eq!(stats.median, 10.5);
    }

    #[test]
    fn summary_stats_error_field_fails_the_view() {
        let err = to_summary_stats(&json!({ "error": "no data" })).unwrap_err();
        assert_eq!(err, FetchError::Backend("no data".to_string()));
    }

    #[test]
    fn grouped_distribution_keeps_backend_groups() {
        let payload = json!([
            { "region": "Central", "malinc": [12.0, 13.5, 9.0] },
            { "region": "Eastern", "malinc": [4.0] },
        ]);
        let groups = to_grouped_distribution(&payload, MeasureColumn::Malinc).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Central");
        assert_eq!(groups[0].values, vec![12.0, 13.5, 9.0]);
        assert_eq!(groups[1].label, "Eastern");
    }

    #[test]
    fn grouped_distribution_requires_the_selected_column() {
        let payload = json!([{ "region": "Central", "malinc": [1.0] }]);
        let err = to_grouped_distribution(&payload, MeasureColumn::Tpr).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
    }

    #[test]
    fn heatmap_reshapes_groups_and_months() {
        let payload = json!({
            "groups": ["Central", "Eastern"],
            "months": [1, 2, 3],
            "matrix": [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
        });
        let heatmap = to_heatmap(&payload).unwrap();
        assert_eq!(heatmap.rows, vec!["Central", "Eastern"]);
        assert_eq!(heatmap.cols, vec!["Month 1", "Month 2", "Month 3"]);
        assert_eq!(heatmap.matrix[1][2], 6.0);
    }

    #[test]
    fn ragged_heatmap_row_fails_the_view() {
        let payload = json!({
            "groups": ["Central", "Eastern"],
            "months": [1, 2, 3],
            "matrix": [[1.0, 2.0, 3.0], [4.0, 5.0]],
        });
        let err = to_heatmap(&payload).unwrap_err();
        match err {
            FetchError::Shape(message) => assert!(message.contains("Eastern")),
            other => panic!("expected a shape failure, got {other:?}"),
        }
    }

    #[test]
    fn heatmap_row_count_must_match_groups() {
        let payload = json!({
            "groups": ["Central", "Eastern"],
            "months": [1],
            "matrix": [[1.0]],
        });
        let err = to_heatmap(&payload).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
    }
}
