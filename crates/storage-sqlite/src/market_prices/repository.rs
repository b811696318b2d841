use agriport_core::market_prices::{
    MarketPrice, MarketPricePatch, MarketPriceRepositoryTrait, NewMarketPrice,
};
use agriport_core::{Result, StoreError};

use super::model::{MarketPriceDB, MarketPricePatchDB, NewMarketPriceDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::market_prices;
use crate::schema::market_prices::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;

pub struct MarketPriceRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MarketPriceRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        MarketPriceRepository { pool, writer }
    }
}

#[async_trait]
impl MarketPriceRepositoryTrait for MarketPriceRepository {
    fn load_prices(&self, crop_filter: Option<&str>) -> Result<Vec<MarketPrice>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = market_prices.into_boxed();
        if let Some(crop) = crop_filter {
            query = query.filter(crop_name.eq(crop.to_string()));
        }
        let rows = query
            .load::<MarketPriceDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(MarketPrice::from).collect())
    }

    async fn insert_price(&self, new_price: NewMarketPrice) -> Result<MarketPrice> {
        self.writer
            .exec(move |conn| {
                let new_price_db = NewMarketPriceDB::from(new_price);
                let row = diesel::insert_into(market_prices::table)
                    .values(&new_price_db)
                    .returning(MarketPriceDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(MarketPrice::from(row))
            })
            .await
    }

    async fn update_price(&self, price_id: i32, patch: MarketPricePatch) -> Result<MarketPrice> {
        self.writer
            .exec(move |conn| {
                let patch_db = MarketPricePatchDB::from(patch);
                diesel::update(market_prices.find(price_id))
                    .set(&patch_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let row = market_prices
                    .find(price_id)
                    .first::<MarketPriceDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(MarketPrice::from(row))
            })
            .await
    }

    async fn delete_price(&self, price_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(market_prices.find(price_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(
                        StoreError::NotFound(format!("no market price with id {price_id}")).into(),
                    );
                }
                Ok(affected)
            })
            .await
    }
}
