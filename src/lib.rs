//! Client for a household energy-tracking page: theme toggle, appliance
//! records and bill prediction against a small JSON backend.

pub mod api;
pub mod config;
pub mod handlers;
pub mod theme;
pub mod types;
pub mod ui;
pub mod validate;
pub mod views;
pub mod widgets;
