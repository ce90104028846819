//! Dropdown selector for the optional region filter.

use dioxus::prelude::*;

use msd_core::filter::FilterPatch;

use crate::state::DashboardState;

/// Selectable regions. The empty value means "All Regions" and clears
/// the filter.
const REGIONS: [&str; 5] = ["Central", "Eastern", "Northern", "Western", "Kampala"];

#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<DashboardState>();
    let selected = state.filters.read().region.clone().unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        state.apply(FilterPatch::region(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "region-select",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Select Region"
            }
            select {
                id: "region-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "All Regions"
                }
                for region in REGIONS {
                    option {
                        value: "{region}",
                        selected: region == selected,
                        "{region}"
                    }
                }
            }
        }
    }
}
