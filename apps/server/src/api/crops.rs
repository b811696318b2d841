use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use agriport_core::crops::{Crop, CropPatch, NewCrop};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{Envelope, UpdateBody};

async fn get_user_crops(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Envelope<Vec<Crop>>>> {
    let crops = state.crop_service.get_crops_by_user(user_id)?;
    Ok(Json(Envelope::data(crops)))
}

async fn add_crop(
    State(state): State<Arc<AppState>>,
    Json(new_crop): Json<NewCrop>,
) -> ApiResult<Json<Envelope<Crop>>> {
    let crop = state.crop_service.create_crop(new_crop).await?;
    Ok(Json(Envelope::with_message("Crop added successfully", crop)))
}

async fn update_crop(
    Path(crop_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<UpdateBody<CropPatch>>,
) -> ApiResult<Json<Envelope<Crop>>> {
    let crop = state.crop_service.update_crop(crop_id, body.data).await?;
    Ok(Json(Envelope::with_message(
        "Crop updated successfully",
        crop,
    )))
}

async fn delete_crop(
    Path(crop_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Envelope<()>>> {
    state.crop_service.delete_crop(crop_id).await?;
    Ok(Json(Envelope::message_only("Crop deleted successfully")))
}

pub fn router() -> Router<Arc<AppState>> {
    // GET reads the path segment as a user id, PUT/DELETE as a crop id,
    // mirroring the legacy route layout.
    Router::new()
        .route("/crops", post(add_crop))
        .route(
            "/crops/{id}",
            get(get_user_crops).put(update_crop).delete(delete_crop),
        )
}
