use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::debug;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Origin required")]
    OriginRequired,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!("rejecting request: {}", self);
        let status = match self {
            ApiError::OriginRequired => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
