use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    auth::{
        http::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
        password::{hash_password, verify_password},
        token::{ACCESS_TOKEN_TTL_SECS, issue_access_token},
    },
    error::{ApiError, ApiResult},
    extractors::json::ApiJson,
    store::StoreError,
    users::NewUser,
};

const MIN_PASSWORD_LEN: usize = 8;

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Invalid registration payload", body = crate::error::ErrorBody),
        (status = 409, description = "Email already exists", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let name = req.name.trim().to_string();
    let email = req.email.trim().to_lowercase();

    if name.is_empty() {
        return Err(ApiError::BadRequest("name is required".to_string()));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::BadRequest("a valid email is required".to_string()));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::BadRequest(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let password_hash =
        hash_password(&req.password).map_err(|error| ApiError::Hash(error.to_string()))?;

    let user = match state
        .users
        .create(NewUser::local(name, email, password_hash))
        .await
    {
        Ok(user) => user,
        Err(StoreError::Conflict(_)) => return Err(ApiError::EmailTaken),
        Err(e) => return Err(ApiError::Store(e)),
    };

    tracing::info!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: user.id,
            name: user.name,
            email: user.email,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Access token", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<(StatusCode, Json<LoginResponse>)> {
    let email = req.email.trim().to_lowercase();
    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    // accounts created through google sign-in have no local password
    let password_hash = user
        .password_hash
        .as_deref()
        .ok_or(ApiError::Unauthorized)?;

    let valid = verify_password(&req.password, password_hash)
        .map_err(|e| ApiError::Hash(e.to_string()))?;
    if !valid {
        return Err(ApiError::Unauthorized);
    }

    let access_token = issue_access_token(&state.jwt_enc, user.id)
        .map_err(|e| ApiError::Token(e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            access_token,
            token_type: "Bearer",
            expires_in: ACCESS_TOKEN_TTL_SECS,
        }),
    ))
}
