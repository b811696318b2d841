//! Negotiations module - domain models, services, and traits.

mod negotiations_model;
mod negotiations_service;
mod negotiations_traits;

// Re-export the public interface
pub use negotiations_model::{Negotiation, NegotiationParty, NegotiationPatch, NewNegotiation};
pub use negotiations_service::NegotiationService;
pub use negotiations_traits::{NegotiationRepositoryTrait, NegotiationServiceTrait};
