pub mod auth_user;
pub mod json;
pub mod path;
pub mod query;
