//! Negotiation domain models.

use serde::{Deserialize, Serialize};

/// A price negotiation between a farmer and a buyer over one crop.
///
/// `status` starts as `"pending"` and is free text afterwards; the portal
/// enforces no transition set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Negotiation {
    pub id: i32,
    pub farmer_id: i32,
    pub buyer_id: i32,
    pub crop_name: String,
    pub quantity_kg: f64,
    pub proposed_price: f64,
    pub notes: Option<String>,
    pub status: String,
}

/// Input model for opening a negotiation. The status is assigned by the
/// store on insert and is not part of the input.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewNegotiation {
    pub farmer_id: i32,
    pub buyer_id: i32,
    pub crop_name: String,
    pub quantity_kg: f64,
    pub proposed_price: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Which side of a negotiation a user is on; selects the id column a
/// listing filters by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegotiationParty {
    Farmer,
    Buyer,
}

/// Partial update for a negotiation; unknown keys are rejected at
/// deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct NegotiationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
