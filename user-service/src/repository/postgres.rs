/// PostgreSQL user repository

use super::UserRepository;
use crate::models::user::{CreateUser, User};
use async_trait::async_trait;
use sqlx::PgPool;
use taskhub_shared::error::RepositoryResult;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, name, created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: CreateUser) -> RepositoryResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, name)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, name, created_at, updated_at
            "#,
        )
        .bind(user.username)
        .bind(user.email)
        .bind(user.name)
        .fetch_one(&self.pool)
        .await?;

        debug!(user_id = user.id, "Inserted user row");
        Ok(user)
    }
}
