//! Data reshaping for the malaria surveillance dashboard.
//!
//! This crate turns raw endpoint payloads into the minimal shapes the
//! charts consume. Every transformer is a pure function; nothing here
//! fetches or renders.

pub mod shapes;
pub mod transform;
