//! HTTP route handlers, one module per entity.

mod crops;
mod home;
mod market_prices;
mod negotiations;
mod users;
mod weather;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(home::router())
        .merge(users::router())
        .merge(crops::router())
        .merge(market_prices::router())
        .merge(weather::router())
        .merge(negotiations::router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        // The legacy portal allowed any origin; the UI is served separately.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
