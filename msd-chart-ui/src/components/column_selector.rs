//! Dropdown selector for the measurement column to analyze.

use dioxus::prelude::*;

use msd_core::column::MeasureColumn;
use msd_core::filter::FilterPatch;

use crate::state::DashboardState;

/// Column dropdown. Reads the current selection from DashboardState and
/// patches `column` on change.
#[component]
pub fn ColumnSelector() -> Element {
    let mut state = use_context::<DashboardState>();
    let selected = state.filters.read().column;
    let options = MeasureColumn::ALL.map(|column| (column, column.as_str(), column.label()));

    let on_change = move |evt: Event<FormData>| {
        if let Ok(column) = evt.value().parse::<MeasureColumn>() {
            state.apply(FilterPatch::column(column));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "column-select",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Column to Analyze"
            }
            select {
                id: "column-select",
                onchange: on_change,
                for (column, value, label) in options {
                    option {
                        value: "{value}",
                        selected: column == selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
