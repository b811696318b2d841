use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};

use agriport_core::weather::{NewWeatherRecord, WeatherPatch, WeatherRecord};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{Envelope, UpdateBody};

#[derive(serde::Deserialize)]
struct ListQuery {
    date: Option<String>,
}

async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> ApiResult<Json<Envelope<Vec<WeatherRecord>>>> {
    let records = state.weather_service.get_weather(params.date.as_deref())?;
    Ok(Json(Envelope::data(records)))
}

async fn add_weather(
    State(state): State<Arc<AppState>>,
    Json(new_record): Json<NewWeatherRecord>,
) -> ApiResult<Json<Envelope<WeatherRecord>>> {
    let record = state.weather_service.create_weather(new_record).await?;
    Ok(Json(Envelope::with_message(
        "Weather data added successfully",
        record,
    )))
}

async fn update_weather(
    Path(record_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<UpdateBody<WeatherPatch>>,
) -> ApiResult<Json<Envelope<WeatherRecord>>> {
    let record = state
        .weather_service
        .update_weather(record_id, body.data)
        .await?;
    Ok(Json(Envelope::with_message(
        "Weather updated successfully",
        record,
    )))
}

async fn delete_weather(
    Path(record_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Envelope<()>>> {
    state.weather_service.delete_weather(record_id).await?;
    Ok(Json(Envelope::message_only("Weather deleted successfully")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/weather", get(get_weather).post(add_weather))
        .route("/weather/{id}", put(update_weather).delete(delete_weather))
}
