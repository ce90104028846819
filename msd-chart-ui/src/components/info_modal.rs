//! "More Details" modal dialog.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct InfoModalProps {
    pub show: bool,
    pub on_close: EventHandler<()>,
}

/// A simple overlay modal with usage notes for the dashboard. Shown
/// from the controls sidebar; closing it is the only interaction.
#[component]
pub fn InfoModal(props: InfoModalProps) -> Element {
    if !props.show {
        return rsx! {};
    }
    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 100;",
            onclick: move |_| props.on_close.call(()),
            div {
                style: "background: white; border-radius: 6px; max-width: 480px; width: 90%; padding: 16px;",
                onclick: move |evt| evt.stop_propagation(),
                h3 {
                    style: "margin: 0 0 12px 0;",
                    "Additional Details"
                }
                p {
                    "This section displays more detailed information about the dashboard or instructions on how to use it."
                }
                p {
                    "Pick a column, forecast horizon, and optional region/site filters on the left; every visualization refreshes independently."
                }
                div {
                    style: "text-align: right; margin-top: 12px;",
                    button {
                        onclick: move |_| props.on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
