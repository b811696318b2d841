use crate::errors::Result;
use crate::negotiations::negotiations_model::{
    Negotiation, NegotiationParty, NegotiationPatch, NewNegotiation,
};
use async_trait::async_trait;

/// Trait for negotiation repository operations
#[async_trait]
pub trait NegotiationRepositoryTrait: Send + Sync {
    fn load_negotiations_for_user(
        &self,
        member_id: i32,
        party: NegotiationParty,
    ) -> Result<Vec<Negotiation>>;
    async fn insert_negotiation(&self, new_negotiation: NewNegotiation) -> Result<Negotiation>;
    async fn update_negotiation(
        &self,
        negotiation_id: i32,
        patch: NegotiationPatch,
    ) -> Result<Negotiation>;
}

/// Trait for negotiation service operations. Negotiations are never deleted,
/// only updated.
#[async_trait]
pub trait NegotiationServiceTrait: Send + Sync {
    fn get_negotiations_for_user(
        &self,
        member_id: i32,
        party: NegotiationParty,
    ) -> Result<Vec<Negotiation>>;
    async fn create_negotiation(&self, new_negotiation: NewNegotiation) -> Result<Negotiation>;
    async fn update_negotiation(
        &self,
        negotiation_id: i32,
        patch: NegotiationPatch,
    ) -> Result<Negotiation>;
}
