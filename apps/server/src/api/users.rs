use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};

use agriport_core::users::{NewUser, User, UserPatch};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{Envelope, UpdateBody};

async fn get_all_users(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Envelope<Vec<User>>>> {
    let users = state.user_service.get_users()?;
    Ok(Json(Envelope::data(users)))
}

async fn add_user(
    State(state): State<Arc<AppState>>,
    Json(new_user): Json<NewUser>,
) -> ApiResult<Json<Envelope<User>>> {
    let user = state.user_service.create_user(new_user).await?;
    Ok(Json(Envelope::with_message("User added successfully", user)))
}

async fn update_user(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<UpdateBody<UserPatch>>,
) -> ApiResult<Json<Envelope<User>>> {
    let user = state.user_service.update_user(user_id, body.data).await?;
    Ok(Json(Envelope::with_message(
        "User updated successfully",
        user,
    )))
}

async fn delete_user(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Envelope<()>>> {
    state.user_service.delete_user(user_id).await?;
    Ok(Json(Envelope::message_only("User deleted successfully")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(get_all_users).post(add_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
}
