//! AgriPort Core - domain entities, services, and traits.
//!
//! This crate contains the portal's business logic: one module per entity,
//! each with its domain models, a service that validates input before any
//! store call, and the repository trait the storage crate implements. It is
//! database-agnostic.

pub mod constants;
pub mod crops;
pub mod errors;
pub mod market_prices;
pub mod negotiations;
pub mod users;
pub mod weather;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
pub use errors::StoreError;
