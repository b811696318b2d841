use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::main_lib::AppState;

/// Liveness probe for the portal UI.
async fn home() -> Json<Value> {
    Json(json!({ "message": "AgriPort API is running" }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(home))
}
