use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};

use agriport_core::negotiations::{
    Negotiation, NegotiationParty, NegotiationPatch, NewNegotiation,
};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{Envelope, UpdateBody};

#[derive(serde::Deserialize)]
struct ListQuery {
    user_id: i32,
    role: NegotiationParty,
}

async fn get_negotiations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> ApiResult<Json<Envelope<Vec<Negotiation>>>> {
    let negotiations = state
        .negotiation_service
        .get_negotiations_for_user(params.user_id, params.role)?;
    Ok(Json(Envelope::data(negotiations)))
}

async fn create_negotiation(
    State(state): State<Arc<AppState>>,
    Json(new_negotiation): Json<NewNegotiation>,
) -> ApiResult<Json<Envelope<Negotiation>>> {
    let negotiation = state
        .negotiation_service
        .create_negotiation(new_negotiation)
        .await?;
    Ok(Json(Envelope::with_message(
        "Negotiation created",
        negotiation,
    )))
}

async fn update_negotiation(
    Path(negotiation_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<UpdateBody<NegotiationPatch>>,
) -> ApiResult<Json<Envelope<Negotiation>>> {
    let negotiation = state
        .negotiation_service
        .update_negotiation(negotiation_id, body.data)
        .await?;
    Ok(Json(Envelope::with_message(
        "Negotiation updated",
        negotiation,
    )))
}

pub fn router() -> Router<Arc<AppState>> {
    // Negotiations are never deleted, only updated.
    Router::new()
        .route(
            "/negotiations",
            get(get_negotiations).post(create_negotiation),
        )
        .route("/negotiations/{id}", put(update_negotiation))
}
