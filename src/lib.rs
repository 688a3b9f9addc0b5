//! Avocado Analytics: price and volume history of US avocados.
//!
//! The core is [`data::loader::load_file`], run once at startup, and the pure
//! [`data::filter::filter`] the dashboard calls on every filter change.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
