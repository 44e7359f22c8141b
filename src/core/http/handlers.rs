use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extractors::auth_user::AuthUser,
    users::AuthMethod,
};

#[derive(Serialize, ToSchema)]
pub struct MeResponse {
    id: Uuid,
    name: String,
    email: String,
    image: Option<String>,
    auth_method: AuthMethod,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    ),
    tag = "Core"
)]
pub async fn health() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Current user profile", body = MeResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Core"
)]
pub async fn me(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<MeResponse>)> {
    // the token may outlive the account
    let row = state
        .users
        .find_by_id(user.id)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    Ok((
        StatusCode::OK,
        Json(MeResponse {
            id: row.id,
            name: row.name,
            email: row.email,
            image: row.image,
            auth_method: row.auth_method,
            created_at: row.created_at,
        }),
    ))
}
