use axum::{Router, routing::get};

use crate::AppState;

pub(crate) mod handlers;

pub use handlers::{MeResponse, health, me};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/me", get(me))
}
