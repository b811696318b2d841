use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};

use agriport_core::market_prices::{MarketPrice, MarketPricePatch, NewMarketPrice};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{Envelope, UpdateBody};

#[derive(serde::Deserialize)]
struct ListQuery {
    crop_name: Option<String>,
}

async fn get_market_prices(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> ApiResult<Json<Envelope<Vec<MarketPrice>>>> {
    let prices = state
        .market_price_service
        .get_prices(params.crop_name.as_deref())?;
    Ok(Json(Envelope::data(prices)))
}

async fn add_market_price(
    State(state): State<Arc<AppState>>,
    Json(new_price): Json<NewMarketPrice>,
) -> ApiResult<Json<Envelope<MarketPrice>>> {
    let price = state.market_price_service.create_price(new_price).await?;
    Ok(Json(Envelope::with_message(
        "Market price added successfully",
        price,
    )))
}

async fn update_market_price(
    Path(price_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<UpdateBody<MarketPricePatch>>,
) -> ApiResult<Json<Envelope<MarketPrice>>> {
    let price = state
        .market_price_service
        .update_price(price_id, body.data)
        .await?;
    Ok(Json(Envelope::with_message(
        "Market price updated successfully",
        price,
    )))
}

async fn delete_market_price(
    Path(price_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Envelope<()>>> {
    state.market_price_service.delete_price(price_id).await?;
    Ok(Json(Envelope::message_only(
        "Market price deleted successfully",
    )))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/market_prices",
            get(get_market_prices).post(add_market_price),
        )
        .route(
            "/market_prices/{id}",
            put(update_market_price).delete(delete_market_price),
        )
}
