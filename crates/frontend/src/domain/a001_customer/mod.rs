//! Customers: data-access slice, shared store and UI.

pub mod api;
pub mod store;
pub mod ui;
