//! Typed wrappers around Plotly.js calls via `js_sys::eval()`.
//!
//! Plotly is loaded by the hosting page (a CDN script tag); this module
//! serializes prepared series data and calls `Plotly.newPlot` once both
//! the library and the target container element exist.

use msd_data::shapes::{ForecastSeries, GroupDistribution, HeatmapData, TimeSeries};
use serde_json::{json, Value};

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('MSD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Render `data`/`layout` JSON into a container.
///
/// Uses a polling loop to wait for Plotly to load and the container DOM
/// element to exist before rendering; charts mount inside rsx branches
/// that may not be committed yet when a loader turns Ready.
pub fn render_plot(container_id: &str, data_json: &str, layout_json: &str) {
    let escaped_data = data_json.replace('\\', "\\\\").replace('\'', "\\'");
    let escaped_layout = layout_json.replace('\\', "\\\\").replace('\'', "\\'");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof Plotly !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        Plotly.newPlot('{container_id}',
                            JSON.parse('{escaped_data}'),
                            JSON.parse('{escaped_layout}'),
                            {{responsive: true}});
                    }} catch(e) {{ console.error('[MSD] Plotly render error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

fn render_json(container_id: &str, data: &Value, layout: &Value) {
    render_plot(container_id, &data.to_string(), &layout.to_string());
}

/// Render the time-series line chart.
pub fn render_time_series(container_id: &str, series: &TimeSeries, column_label: &str) {
    let data = json!([{
        "x": series.x,
        "y": series.y,
        "type": "scatter",
        "mode": "lines+markers",
        "name": column_label,
    }]);
    let layout = json!({ "title": format!("{column_label} Over Time") });
    render_json(container_id, &data, &layout);
}

/// Render the forecast line chart.
pub fn render_forecast(
    container_id: &str,
    series: &ForecastSeries,
    column_label: &str,
    steps: u32,
) {
    let data = json!([{
        "x": series.x,
        "y": series.y,
        "type": "scatter",
        "mode": "lines+markers",
        "name": "Forecast",
    }]);
    let layout = json!({ "title": format!("{column_label} Forecast for {steps} Months") });
    render_json(container_id, &data, &layout);
}

/// Render one box trace per group.
pub fn render_box(container_id: &str, groups: &[GroupDistribution], column_label: &str) {
    let data: Vec<Value> = groups
        .iter()
        .map(|group| {
            json!({
                "y": group.values,
                "name": group.label,
                "type": "box",
            })
        })
        .collect();
    let layout = json!({ "title": format!("Box Plot of {column_label} by Region") });
    render_json(container_id, &Value::Array(data), &layout);
}

/// Render one violin trace per group, with the inner box and mean line
/// visible and all points shown.
pub fn render_violin(container_id: &str, groups: &[GroupDistribution], column_label: &str) {
    let data: Vec<Value> = groups
        .iter()
        .map(|group| {
            json!({
                "y": group.values,
                "name": group.label,
                "type": "violin",
                "box": { "visible": true },
                "meanline": { "visible": true },
                "points": "all",
            })
        })
        .collect();
    let layout = json!({ "title": format!("Violin Plot of {column_label} by Region") });
    render_json(container_id, &Value::Array(data), &layout);
}

/// Render the region-by-month heatmap.
pub fn render_heatmap(container_id: &str, heatmap: &HeatmapData, column_label: &str) {
    let data = json!([{
        "x": heatmap.cols,
        "y": heatmap.rows,
        "z": heatmap.matrix,
        "type": "heatmap",
        "colorscale": "YlOrRd",
    }]);
    let layout = json!({
        "title": format!("Heatmap of {column_label} by Region & Month"),
        "xaxis": { "title": "Month" },
        "yaxis": { "title": "Region" },
    });
    render_json(container_id, &data, &layout);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{container_id}'); \
         if (el) {{ if (typeof Plotly !== 'undefined') Plotly.purge('{container_id}'); el.innerHTML = ''; }}",
    ));
}
