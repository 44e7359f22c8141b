//! In-memory user store for tests and database-less runs.

use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{StoreError, StoreResult};

use super::{
    model::{NewUser, User},
    repo::UserStore,
};

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict("users_email_key".to_string()));
        }
        if let Some(google_id) = &user.google_id {
            if users
                .values()
                .any(|u| u.google_id.as_ref() == Some(google_id))
            {
                return Err(StoreError::Conflict("users_google_id_key".to_string()));
            }
        }

        let stored = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            image: user.image,
            password_hash: user.password_hash,
            auth_method: user.auth_method,
            google_id: user.google_id,
            created_at: OffsetDateTime::now_utc(),
        };
        users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::model::AuthMethod;

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = MemoryUserStore::new();
        let first = store
            .create(NewUser::local(
                "Ann".to_string(),
                "ann@example.test".to_string(),
                "hash".to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(first.auth_method, AuthMethod::Local);

        let err = store
            .create(NewUser::local(
                "Other Ann".to_string(),
                "ann@example.test".to_string(),
                "hash".to_string(),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));

        let found = store.find_by_email("ann@example.test").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(found.name, "Ann");
    }

    #[tokio::test]
    async fn google_ids_are_unique_when_present() {
        let store = MemoryUserStore::new();
        let google = |email: &str| NewUser {
            name: "G".to_string(),
            email: email.to_string(),
            image: None,
            password_hash: None,
            auth_method: AuthMethod::Google,
            google_id: Some("g-1".to_string()),
        };

        store.create(google("a@example.test")).await.unwrap();
        let err = store.create(google("b@example.test")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));

        // accounts without a google id never collide with each other
        for email in ["c@example.test", "d@example.test"] {
            store
                .create(NewUser::local("L".to_string(), email.to_string(), "h".to_string()))
                .await
                .unwrap();
        }
    }
}
