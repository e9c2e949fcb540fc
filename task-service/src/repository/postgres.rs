/// PostgreSQL task repository
///
/// # Example
///
/// ```no_run
/// use task_service::models::task::{CreateTask, TaskStatus};
/// use task_service::repository::{PgTaskRepository, TaskRepository};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let repository = PgTaskRepository::new(pool);
///
/// let task = repository
///     .insert(CreateTask {
///         title: "Write report".to_string(),
///         description: None,
///         user_id: 1,
///         status: TaskStatus::Pending,
///     })
///     .await?;
///
/// let pending = repository
///     .find_by_user_id_and_status(1, TaskStatus::Pending)
///     .await?;
/// assert!(pending.iter().any(|t| t.id == task.id));
/// # Ok(())
/// # }
/// ```

use super::TaskRepository;
use crate::models::task::{CreateTask, Task, TaskStatus};
use async_trait::async_trait;
use sqlx::PgPool;
use taskhub_shared::error::{RepositoryError, RepositoryResult};
use tracing::debug;

const TASK_COLUMNS: &str = "id, title, description, user_id, status, created_at, updated_at";

/// Task repository over a sqlx connection pool
#[derive(Debug, Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks ORDER BY id",
            TASK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE id = $1",
            TASK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn insert(&self, task: CreateTask) -> RepositoryResult<Task> {
        let task = sqlx::query_as::<_, Task>(&format!(
            r#"
            INSERT INTO tasks (title, description, user_id, status)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            TASK_COLUMNS
        ))
        .bind(task.title)
        .bind(task.description)
        .bind(task.user_id)
        .bind(task.status)
        .fetch_one(&self.pool)
        .await?;

        debug!(task_id = task.id, "Inserted task row");
        Ok(task)
    }

    async fn save(&self, task: Task) -> RepositoryResult<Task> {
        let id = task.id;
        let saved = sqlx::query_as::<_, Task>(&format!(
            r#"
            UPDATE tasks
            SET title = $2, description = $3, user_id = $4, status = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            TASK_COLUMNS
        ))
        .bind(task.id)
        .bind(task.title)
        .bind(task.description)
        .bind(task.user_id)
        .bind(task.status)
        .fetch_optional(&self.pool)
        .await?;

        saved.ok_or(RepositoryError::NotFound { entity: "Task", id })
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(task_id = id, rows = result.rows_affected(), "Deleted task rows");
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM tasks WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn find_by_user_id(&self, user_id: i64) -> RepositoryResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE user_id = $1 ORDER BY id",
            TASK_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn find_by_user_id_and_status(
        &self,
        user_id: i64,
        status: TaskStatus,
    ) -> RepositoryResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE user_id = $1 AND status = $2 ORDER BY id",
            TASK_COLUMNS
        ))
        .bind(user_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }
}
