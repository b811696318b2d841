use log::debug;
use std::sync::Arc;

use super::negotiations_model::{Negotiation, NegotiationParty, NegotiationPatch, NewNegotiation};
use super::negotiations_traits::{NegotiationRepositoryTrait, NegotiationServiceTrait};
use crate::errors::{Result, ValidationError};

/// Service for managing negotiations.
pub struct NegotiationService {
    repository: Arc<dyn NegotiationRepositoryTrait>,
}

impl NegotiationService {
    /// Creates a new NegotiationService instance
    pub fn new(repository: Arc<dyn NegotiationRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl NegotiationServiceTrait for NegotiationService {
    /// Lists negotiations where the user is the given party
    fn get_negotiations_for_user(
        &self,
        member_id: i32,
        party: NegotiationParty,
    ) -> Result<Vec<Negotiation>> {
        self.repository
            .load_negotiations_for_user(member_id, party)
    }

    /// Opens a negotiation after checking the required fields; the store
    /// assigns the initial "pending" status
    async fn create_negotiation(&self, new_negotiation: NewNegotiation) -> Result<Negotiation> {
        if new_negotiation.farmer_id <= 0
            || new_negotiation.buyer_id <= 0
            || new_negotiation.crop_name.is_empty()
        {
            return Err(
                ValidationError::MissingFields("All fields are required".to_string()).into(),
            );
        }
        debug!(
            "Creating negotiation for '{}' between farmer {} and buyer {}",
            new_negotiation.crop_name, new_negotiation.farmer_id, new_negotiation.buyer_id
        );
        self.repository.insert_negotiation(new_negotiation).await
    }

    /// Applies a partial update and returns the merged record
    async fn update_negotiation(
        &self,
        negotiation_id: i32,
        patch: NegotiationPatch,
    ) -> Result<Negotiation> {
        self.repository
            .update_negotiation(negotiation_id, patch)
            .await
    }
}
