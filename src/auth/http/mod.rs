use axum::{Router, routing::post};

use crate::AppState;

mod dto;
pub(crate) mod handlers;

pub use dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use handlers::{login, register};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
