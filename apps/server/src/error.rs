//! Maps service errors onto the HTTP surface.
//!
//! Every failure - validation or store - becomes a 400 with body
//! `{"detail": "<message>"}`, the message text verbatim. The portal UI
//! parses exactly that shape for its error display.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Wrapper that lets handlers bubble core errors with `?`.
pub struct ApiError(pub agriport_core::Error);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<agriport_core::Error> for ApiError {
    fn from(err: agriport_core::Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.0.to_string();
        if self.0.is_validation() {
            tracing::debug!("request rejected: {detail}");
        } else {
            tracing::warn!("store operation failed: {detail}");
        }
        (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail }))).into_response()
    }
}
