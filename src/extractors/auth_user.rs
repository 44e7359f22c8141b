use axum::{extract::FromRequestParts, http::header};
use uuid::Uuid;

use crate::{AppState, auth::token::verify_access_token, error::ApiError};

/// Identity of the caller, taken from an `Authorization: Bearer` token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;
        let token = auth.strip_prefix("Bearer ").ok_or(ApiError::Unauthorized)?;

        let id = verify_access_token(&state.jwt_dec, token).ok_or(ApiError::Unauthorized)?;
        Ok(AuthUser { id })
    }
}
