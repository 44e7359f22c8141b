use std::sync::Arc;

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::{notes::repo::NoteStore, users::repo::UserStore};

pub mod app;
pub mod auth;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
mod extractors;
pub mod notes;
pub mod store;
pub mod users;

#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteStore>,
    pub users: Arc<dyn UserStore>,
    pub jwt_enc: EncodingKey,
    pub jwt_dec: DecodingKey,
}

impl AppState {
    pub fn new(
        notes: Arc<dyn NoteStore>,
        users: Arc<dyn UserStore>,
        jwt_secret: &str,
    ) -> Self {
        Self {
            notes,
            users,
            jwt_enc: EncodingKey::from_secret(jwt_secret.as_bytes()),
            jwt_dec: DecodingKey::from_secret(jwt_secret.as_bytes()),
        }
    }
}
