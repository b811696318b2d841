//! Market price domain models.

use serde::{Deserialize, Serialize};

/// A per-kg price quote for a crop, posted by a buyer (admin) account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketPrice {
    pub id: i32,
    pub crop_name: String,
    pub date: String,
    pub price_per_kg: f64,
    pub buyer_id: i32,
}

/// Input model for posting a new market price.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewMarketPrice {
    pub crop_name: String,
    pub date: String,
    pub price_per_kg: f64,
    pub buyer_id: i32,
}

/// Partial update for a market price; unknown keys are rejected at
/// deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct MarketPricePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<i32>,
}
