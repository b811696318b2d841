//! Market prices module - domain models, services, and traits.

mod market_prices_model;
mod market_prices_service;
mod market_prices_traits;

// Re-export the public interface
pub use market_prices_model::{MarketPrice, MarketPricePatch, NewMarketPrice};
pub use market_prices_service::MarketPriceService;
pub use market_prices_traits::{MarketPriceRepositoryTrait, MarketPriceServiceTrait};
