//! AgriPort server - HTTP API over the portal services.
//!
//! Exposes one route per entity/verb pair and wraps every outcome in the
//! `{success, message?, data?}` envelope the portal UI expects.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;
pub mod models;

pub use config::Config;
pub use main_lib::{build_state, init_tracing, AppState};
