//! Database models for negotiations.

use agriport_core::constants::NEGOTIATION_STATUS_PENDING;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for negotiations
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::negotiations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NegotiationDB {
    pub id: i32,
    pub farmer_id: i32,
    pub buyer_id: i32,
    pub crop_name: String,
    pub quantity_kg: f64,
    pub proposed_price: f64,
    pub notes: Option<String>,
    pub status: String,
}

/// Database model for opening a negotiation; the status column is always
/// written as "pending"
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::negotiations)]
pub struct NewNegotiationDB {
    pub farmer_id: i32,
    pub buyer_id: i32,
    pub crop_name: String,
    pub quantity_kg: f64,
    pub proposed_price: f64,
    pub notes: Option<String>,
    pub status: String,
}

/// Changeset for partial negotiation updates; `None` fields are left
/// untouched
#[derive(AsChangeset, Serialize, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::negotiations)]
pub struct NegotiationPatchDB {
    pub farmer_id: Option<i32>,
    pub buyer_id: Option<i32>,
    pub crop_name: Option<String>,
    pub quantity_kg: Option<f64>,
    pub proposed_price: Option<f64>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

// Conversion to domain models
impl From<NegotiationDB> for agriport_core::negotiations::Negotiation {
    fn from(db: NegotiationDB) -> Self {
        Self {
            id: db.id,
            farmer_id: db.farmer_id,
            buyer_id: db.buyer_id,
            crop_name: db.crop_name,
            quantity_kg: db.quantity_kg,
            proposed_price: db.proposed_price,
            notes: db.notes,
            status: db.status,
        }
    }
}

impl From<agriport_core::negotiations::NewNegotiation> for NewNegotiationDB {
    fn from(domain: agriport_core::negotiations::NewNegotiation) -> Self {
        Self {
            farmer_id: domain.farmer_id,
            buyer_id: domain.buyer_id,
            crop_name: domain.crop_name,
            quantity_kg: domain.quantity_kg,
            proposed_price: domain.proposed_price,
            notes: domain.notes,
            status: NEGOTIATION_STATUS_PENDING.to_string(),
        }
    }
}

impl From<agriport_core::negotiations::NegotiationPatch> for NegotiationPatchDB {
    fn from(domain: agriport_core::negotiations::NegotiationPatch) -> Self {
        Self {
            farmer_id: domain.farmer_id,
            buyer_id: domain.buyer_id,
            crop_name: domain.crop_name,
            quantity_kg: domain.quantity_kg,
            proposed_price: domain.proposed_price,
            notes: domain.notes,
            status: domain.status,
        }
    }
}
