//! SQLite storage implementation for market prices.

mod model;
mod repository;

pub use model::{MarketPriceDB, MarketPricePatchDB, NewMarketPriceDB};
pub use repository::MarketPriceRepository;
