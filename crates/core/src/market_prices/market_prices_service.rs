use std::sync::Arc;

use super::market_prices_model::{MarketPrice, MarketPricePatch, NewMarketPrice};
use super::market_prices_traits::{MarketPriceRepositoryTrait, MarketPriceServiceTrait};
use crate::errors::{Result, ValidationError};

/// Service for managing market prices.
pub struct MarketPriceService {
    repository: Arc<dyn MarketPriceRepositoryTrait>,
}

impl MarketPriceService {
    /// Creates a new MarketPriceService instance
    pub fn new(repository: Arc<dyn MarketPriceRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl MarketPriceServiceTrait for MarketPriceService {
    /// Lists prices, optionally filtered by crop name
    fn get_prices(&self, crop_filter: Option<&str>) -> Result<Vec<MarketPrice>> {
        self.repository.load_prices(crop_filter)
    }

    /// Posts a new price after checking the required fields
    async fn create_price(&self, new_price: NewMarketPrice) -> Result<MarketPrice> {
        if new_price.crop_name.is_empty() || new_price.date.is_empty() || new_price.buyer_id <= 0 {
            return Err(
                ValidationError::MissingFields("All fields are required".to_string()).into(),
            );
        }
        self.repository.insert_price(new_price).await
    }

    /// Applies a partial update and returns the merged record
    async fn update_price(&self, price_id: i32, patch: MarketPricePatch) -> Result<MarketPrice> {
        self.repository.update_price(price_id, patch).await
    }

    /// Deletes a price by id
    async fn delete_price(&self, price_id: i32) -> Result<usize> {
        self.repository.delete_price(price_id).await
    }
}
