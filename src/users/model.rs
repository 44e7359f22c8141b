use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "auth_method", rename_all = "lowercase")]
pub enum AuthMethod {
    #[default]
    Local,
    Google,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    /// Argon2 PHC string. `None` for accounts without a local password.
    pub password_hash: Option<String>,
    pub auth_method: AuthMethod,
    pub google_id: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub password_hash: Option<String>,
    pub auth_method: AuthMethod,
    pub google_id: Option<String>,
}

impl NewUser {
    pub fn local(name: String, email: String, password_hash: String) -> Self {
        Self {
            name,
            email,
            image: None,
            password_hash: Some(password_hash),
            auth_method: AuthMethod::Local,
            google_id: None,
        }
    }
}
