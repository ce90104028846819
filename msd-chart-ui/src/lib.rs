//! Shared Dioxus components, fetch layer, and Plotly bridge for the
//! malaria surveillance dashboard.
//!
//! This crate provides:
//! - `state`: the shared filter state signal provided via context
//! - `fetch`: browser fetch wrapper returning interpreted JSON payloads
//! - `js_bridge`: Rust wrappers for Plotly chart calls via `js_sys::eval()`
//! - `components`: reusable RSX components (controls, containers, cards)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
