use crate::errors::Result;
use crate::market_prices::market_prices_model::{MarketPrice, MarketPricePatch, NewMarketPrice};
use async_trait::async_trait;

/// Trait for market price repository operations
#[async_trait]
pub trait MarketPriceRepositoryTrait: Send + Sync {
    fn load_prices(&self, crop_filter: Option<&str>) -> Result<Vec<MarketPrice>>;
    async fn insert_price(&self, new_price: NewMarketPrice) -> Result<MarketPrice>;
    async fn update_price(&self, price_id: i32, patch: MarketPricePatch) -> Result<MarketPrice>;
    async fn delete_price(&self, price_id: i32) -> Result<usize>;
}

/// Trait for market price service operations
#[async_trait]
pub trait MarketPriceServiceTrait: Send + Sync {
    fn get_prices(&self, crop_filter: Option<&str>) -> Result<Vec<MarketPrice>>;
    async fn create_price(&self, new_price: NewMarketPrice) -> Result<MarketPrice>;
    async fn update_price(&self, price_id: i32, patch: MarketPricePatch) -> Result<MarketPrice>;
    async fn delete_price(&self, price_id: i32) -> Result<usize>;
}
