//! Number input for the forecast horizon.

use dioxus::prelude::*;

use msd_core::filter::FilterPatch;

use crate::state::DashboardState;

/// Months-to-forecast input. Unparseable or non-positive entries leave
/// the previous valid horizon in place (the clamp policy lives in
/// `FilterState::apply`).
#[component]
pub fn ForecastStepsInput() -> Element {
    let mut state = use_context::<DashboardState>();
    let steps = state.filters.read().forecast_steps;

    let on_change = move |evt: Event<FormData>| {
        if let Ok(requested) = evt.value().parse::<i64>() {
            state.apply(FilterPatch::forecast_steps(requested));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "forecast-steps",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Months to Forecast"
            }
            input {
                id: "forecast-steps",
                r#type: "number",
                min: "1",
                value: "{steps}",
                style: "width: 80px;",
                onchange: on_change,
            }
        }
    }
}
