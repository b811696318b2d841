use agriport_core::negotiations::{
    Negotiation, NegotiationParty, NegotiationPatch, NegotiationRepositoryTrait, NewNegotiation,
};
use agriport_core::Result;

use super::model::{NegotiationDB, NegotiationPatchDB, NewNegotiationDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::negotiations;
use crate::schema::negotiations::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;

pub struct NegotiationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl NegotiationRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        NegotiationRepository { pool, writer }
    }
}

#[async_trait]
impl NegotiationRepositoryTrait for NegotiationRepository {
    fn load_negotiations_for_user(
        &self,
        member_id: i32,
        party: NegotiationParty,
    ) -> Result<Vec<Negotiation>> {
        let mut conn = get_connection(&self.pool)?;
        let query = match party {
            NegotiationParty::Farmer => negotiations.filter(farmer_id.eq(member_id)).into_boxed(),
            NegotiationParty::Buyer => negotiations.filter(buyer_id.eq(member_id)).into_boxed(),
        };
        let rows = query
            .load::<NegotiationDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Negotiation::from).collect())
    }

    async fn insert_negotiation(&self, new_negotiation: NewNegotiation) -> Result<Negotiation> {
        self.writer
            .exec(move |conn| {
                let new_negotiation_db = NewNegotiationDB::from(new_negotiation);
                let row = diesel::insert_into(negotiations::table)
                    .values(&new_negotiation_db)
                    .returning(NegotiationDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Negotiation::from(row))
            })
            .await
    }

    async fn update_negotiation(
        &self,
        negotiation_id: i32,
        patch: NegotiationPatch,
    ) -> Result<Negotiation> {
        self.writer
            .exec(move |conn| {
                let patch_db = NegotiationPatchDB::from(patch);
                diesel::update(negotiations.find(negotiation_id))
                    .set(&patch_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let row = negotiations
                    .find(negotiation_id)
                    .first::<NegotiationDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Negotiation::from(row))
            })
            .await
    }
}
