/// Storage port for tasks
///
/// [`TaskService`](crate::service::TaskService) only sees this trait. Two
/// adapters implement it:
///
/// - `postgres`: [`PgTaskRepository`], backed by the `tasks` table
/// - `memory`: [`InMemoryTaskRepository`], used by tests and local runs
///
/// Lookups that miss return `Ok(None)` or an empty list. Errors are reserved
/// for storage failures.

use crate::models::task::{CreateTask, Task, TaskStatus};
use async_trait::async_trait;
use taskhub_shared::error::RepositoryResult;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryTaskRepository;
pub use postgres::PgTaskRepository;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Task>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Task>>;

    /// Inserts a task that has no id yet and returns it with the generated
    /// id and timestamps
    async fn insert(&self, task: CreateTask) -> RepositoryResult<Task>;

    /// Writes an existing task back, refreshing `updated_at`
    ///
    /// Fails with `RepositoryError::NotFound` if the row no longer exists.
    async fn save(&self, task: Task) -> RepositoryResult<Task>;

    /// Removes a task; succeeds whether or not it existed
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool>;

    async fn find_by_user_id(&self, user_id: i64) -> RepositoryResult<Vec<Task>>;

    async fn find_by_user_id_and_status(
        &self,
        user_id: i64,
        status: TaskStatus,
    ) -> RepositoryResult<Vec<Task>>;
}
