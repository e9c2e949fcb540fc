/// Storage port for users
///
/// Implemented by [`PgUserRepository`] and [`InMemoryUserRepository`].
/// Username uniqueness is a storage concern: both adapters reject a
/// duplicate with `RepositoryError::Conflict`.

use crate::models::user::{CreateUser, User};
use async_trait::async_trait;
use taskhub_shared::error::RepositoryResult;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;

    /// Inserts a new user and returns it with the generated id
    async fn insert(&self, user: CreateUser) -> RepositoryResult<User>;
}
