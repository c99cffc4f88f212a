//! Shared Dioxus components and D3.js bridge for the earthquake dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js scatter chart, browser fetch and timers
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (table, search box, pagination, ...)

pub mod js_bridge;
pub mod state;
pub mod components;
