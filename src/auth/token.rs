//! HS256 access tokens.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Lifetime of an access token, in seconds.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 30 * 60;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    sub: String, // user_id
    iat: i64,
    exp: i64,
}

pub fn issue_access_token(
    key: &EncodingKey,
    user_id: Uuid,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + ACCESS_TOKEN_TTL_SECS,
    };
    encode(&Header::new(Algorithm::HS256), &claims, key)
}

/// Returns the user id carried by a valid, unexpired token.
pub fn verify_access_token(key: &DecodingKey, token: &str) -> Option<Uuid> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let data = decode::<Claims>(token, key, &validation).ok()?;
    Uuid::parse_str(&data.claims.sub).ok()
}
