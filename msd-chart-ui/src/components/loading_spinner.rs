//! Loading indicator component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Per-view loading message, e.g. "Loading Forecast..."
    #[props(default = "Loading data...".to_string())]
    pub message: String,
}

/// Simple loading indicator shown while a view's loader is in flight.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{props.message}"
        }
    }
}
