//! SQLite storage implementation for negotiations.

mod model;
mod repository;

pub use model::{NegotiationDB, NegotiationPatchDB, NewNegotiationDB};
pub use repository::NegotiationRepository;
