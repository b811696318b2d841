//! Database models for market prices.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for market prices
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::market_prices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MarketPriceDB {
    pub id: i32,
    pub crop_name: String,
    pub date: String,
    pub price_per_kg: f64,
    pub buyer_id: i32,
}

/// Database model for posting a new market price
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::market_prices)]
pub struct NewMarketPriceDB {
    pub crop_name: String,
    pub date: String,
    pub price_per_kg: f64,
    pub buyer_id: i32,
}

/// Changeset for partial price updates; `None` fields are left untouched
#[derive(AsChangeset, Serialize, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::market_prices)]
pub struct MarketPricePatchDB {
    pub crop_name: Option<String>,
    pub date: Option<String>,
    pub price_per_kg: Option<f64>,
    pub buyer_id: Option<i32>,
}

// Conversion to domain models
impl From<MarketPriceDB> for agriport_core::market_prices::MarketPrice {
    fn from(db: MarketPriceDB) -> Self {
        Self {
            id: db.id,
            crop_name: db.crop_name,
            date: db.date,
            price_per_kg: db.price_per_kg,
            buyer_id: db.buyer_id,
        }
    }
}

impl From<agriport_core::market_prices::NewMarketPrice> for NewMarketPriceDB {
    fn from(domain: agriport_core::market_prices::NewMarketPrice) -> Self {
        Self {
            crop_name: domain.crop_name,
            date: domain.date,
            price_per_kg: domain.price_per_kg,
            buyer_id: domain.buyer_id,
        }
    }
}

impl From<agriport_core::market_prices::MarketPricePatch> for MarketPricePatchDB {
    fn from(domain: agriport_core::market_prices::MarketPricePatch) -> Self {
        Self {
            crop_name: domain.crop_name,
            date: domain.date,
            price_per_kg: domain.price_per_kg,
            buyer_id: domain.buyer_id,
        }
    }
}
