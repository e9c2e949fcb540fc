/// In-memory user repository
///
/// Mirrors the `users_username_key` constraint so duplicate usernames fail
/// the same way they do against PostgreSQL.

use super::UserRepository;
use crate::models::user::{CreateUser, User};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use taskhub_shared::error::{RepositoryError, RepositoryResult};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    users: BTreeMap<i64, User>,
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.store.read().await.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        Ok(self.store.read().await.users.get(&id).cloned())
    }

    async fn insert(&self, user: CreateUser) -> RepositoryResult<User> {
        let mut store = self.store.write().await;

        if store.users.values().any(|u| u.username == user.username) {
            return Err(RepositoryError::Conflict("users_username_key".to_string()));
        }

        store.last_id += 1;
        let now = Utc::now();
        let user = User {
            id: store.last_id,
            username: user.username,
            email: user.email,
            name: user.name,
            created_at: now,
            updated_at: now,
        };

        store.users.insert(user.id, user.clone());
        Ok(user)
    }
}
