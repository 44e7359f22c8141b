use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::store::StoreError;

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    EmailTaken,
    BadRequest(String),
    Store(StoreError),
    Hash(String),
    Token(String),
    Unauthorized,
    NotFound,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        ApiError::Store(error)
    }
}

fn body(
    status: StatusCode,
    error: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(ErrorBody {
            error,
            message: message.into(),
        }),
    )
        .into_response()
}

fn internal() -> axum::response::Response {
    body(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL",
        "Internal server error",
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::EmailTaken => {
                body(StatusCode::CONFLICT, "EMAIL_TAKEN", "Email already exists")
            }
            ApiError::BadRequest(msg) => body(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Store(e) => {
                tracing::error!("store error: {e}");
                internal()
            }
            ApiError::Hash(msg) => {
                tracing::error!("hash error: {msg}");
                internal()
            }
            ApiError::Token(msg) => {
                tracing::error!("token error: {msg}");
                internal()
            }
            ApiError::Unauthorized => body(
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Invalid credentials",
            ),
            ApiError::NotFound => body(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found"),
        }
    }
}
