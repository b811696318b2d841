use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use agriport_core::crops::{CropService, CropServiceTrait};
use agriport_core::market_prices::{MarketPriceService, MarketPriceServiceTrait};
use agriport_core::negotiations::{NegotiationService, NegotiationServiceTrait};
use agriport_core::users::{UserService, UserServiceTrait};
use agriport_core::weather::{WeatherService, WeatherServiceTrait};
use agriport_storage_sqlite::crops::CropRepository;
use agriport_storage_sqlite::db;
use agriport_storage_sqlite::market_prices::MarketPriceRepository;
use agriport_storage_sqlite::negotiations::NegotiationRepository;
use agriport_storage_sqlite::users::UserRepository;
use agriport_storage_sqlite::weather::WeatherRepository;

use crate::config::Config;

/// Shared handle to every entity service, injected into each route handler.
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub crop_service: Arc<dyn CropServiceTrait + Send + Sync>,
    pub market_price_service: Arc<dyn MarketPriceServiceTrait + Send + Sync>,
    pub weather_service: Arc<dyn WeatherServiceTrait + Send + Sync>,
    pub negotiation_service: Arc<dyn NegotiationServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("AGRIPORT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds the pool, writer actor, repositories, and services. The whole
/// object graph is constructed here and owned by the caller; nothing is
/// global.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let user_service: Arc<dyn UserServiceTrait + Send + Sync> =
        Arc::new(UserService::new(user_repository));

    let crop_repository = Arc::new(CropRepository::new(pool.clone(), writer.clone()));
    let crop_service: Arc<dyn CropServiceTrait + Send + Sync> =
        Arc::new(CropService::new(crop_repository));

    let market_price_repository =
        Arc::new(MarketPriceRepository::new(pool.clone(), writer.clone()));
    let market_price_service: Arc<dyn MarketPriceServiceTrait + Send + Sync> =
        Arc::new(MarketPriceService::new(market_price_repository));

    let weather_repository = Arc::new(WeatherRepository::new(pool.clone(), writer.clone()));
    let weather_service: Arc<dyn WeatherServiceTrait + Send + Sync> =
        Arc::new(WeatherService::new(weather_repository));

    let negotiation_repository =
        Arc::new(NegotiationRepository::new(pool.clone(), writer.clone()));
    let negotiation_service: Arc<dyn NegotiationServiceTrait + Send + Sync> =
        Arc::new(NegotiationService::new(negotiation_repository));

    Ok(Arc::new(AppState {
        user_service,
        crop_service,
        market_price_service,
        weather_service,
        negotiation_service,
    }))
}
