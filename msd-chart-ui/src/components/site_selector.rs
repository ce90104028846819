//! Dropdown selector for the optional site filter.

use dioxus::prelude::*;

use msd_core::filter::FilterPatch;

use crate::state::DashboardState;

/// Selectable sites. The empty value means "All Sites" and clears the
/// filter.
const SITES: [&str; 2] = ["Site001", "Site002"];

#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<DashboardState>();
    let selected = state.filters.read().site.clone().unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        state.apply(FilterPatch::site(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "site-select",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Select Site"
            }
            select {
                id: "site-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "All Sites"
                }
                for site in SITES {
                    option {
                        value: "{site}",
                        selected: site == selected,
                        "{site}"
                    }
                }
            }
        }
    }
}
