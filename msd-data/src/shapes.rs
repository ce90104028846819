//! Chart-ready output shapes, one per visualization kind.
//!
//! All shapes derive `Serialize` so they can be handed to Plotly as
//! JSON from the WASM frontend without re-keying.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parallel x/y series for the time-series plot.
///
/// `x` and `y` are always the same length; records whose selected
/// column was null never enter the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
}

/// Forecast horizon series.
///
/// Point order is the backend's emission order; the backend emits
/// chronologically and the transformer does not re-sort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSeries {
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
}

/// Summary statistics for the selected column under the active filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub column: String,
    pub count: u64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub std: f64,
}

/// One group's raw observations for the box and violin plots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDistribution {
    pub label: String,
    pub values: Vec<f64>,
}

/// Region-by-month matrix for the heatmap.
///
/// `matrix` is exactly `rows.len()` by `cols.len()`; the transformer
/// rejects anything ragged before it gets here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapData {
    pub rows: Vec<String>,
    pub cols: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}
