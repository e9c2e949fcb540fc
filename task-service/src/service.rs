/// Task business logic
///
/// Thin orchestration over a [`TaskRepository`]. Misses are values, not
/// errors: lookups return `Option`, deletes return `bool`. Storage errors
/// propagate unchanged.
///
/// `update_task` and `delete_task` each take two round-trips (read, then
/// write) without a transaction. A concurrent writer on the same id can
/// cause a lost update, or make `save` fail with `NotFound` if the row is
/// deleted in between.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use task_service::models::task::{CreateTask, TaskStatus, UpdateTask};
/// use task_service::repository::InMemoryTaskRepository;
/// use task_service::service::TaskService;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let service = TaskService::new(Arc::new(InMemoryTaskRepository::new()));
///
/// let task = service
///     .create_task(CreateTask {
///         title: "Write report".to_string(),
///         description: None,
///         user_id: 1,
///         status: TaskStatus::Pending,
///     })
///     .await?;
///
/// let updated = service
///     .update_task(task.id, UpdateTask {
///         status: Some(TaskStatus::Completed),
///         ..Default::default()
///     })
///     .await?
///     .expect("task exists");
/// assert_eq!(updated.title, "Write report");
/// # Ok(())
/// # }
/// ```

use crate::models::task::{CreateTask, Task, TaskStatus, UpdateTask};
use crate::repository::TaskRepository;
use std::sync::Arc;
use taskhub_shared::error::RepositoryResult;
use tracing::{debug, info};

#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_tasks(&self) -> RepositoryResult<Vec<Task>> {
        self.repository.find_all().await
    }

    pub async fn get_task_by_id(&self, id: i64) -> RepositoryResult<Option<Task>> {
        debug!(task_id = id, "Looking up task");
        self.repository.find_by_id(id).await
    }

    /// Lists a user's tasks, optionally narrowed to one status
    pub async fn get_tasks_for_user(
        &self,
        user_id: i64,
        status: Option<TaskStatus>,
    ) -> RepositoryResult<Vec<Task>> {
        debug!(user_id, status = ?status, "Listing tasks for user");
        match status {
            Some(status) => {
                self.repository
                    .find_by_user_id_and_status(user_id, status)
                    .await
            }
            None => self.repository.find_by_user_id(user_id).await,
        }
    }

    /// Persists a new task as given
    pub async fn create_task(&self, task: CreateTask) -> RepositoryResult<Task> {
        let task = self.repository.insert(task).await?;
        info!(task_id = task.id, user_id = task.user_id, "Task created");
        Ok(task)
    }

    /// Merges `patch` into an existing task and saves it
    ///
    /// Returns `Ok(None)` without writing anything when the task does not
    /// exist. See [`Task::apply_update`] for the merge rules.
    pub async fn update_task(&self, id: i64, patch: UpdateTask) -> RepositoryResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            debug!(task_id = id, "Update skipped, task not found");
            return Ok(None);
        };

        if patch.is_empty() {
            debug!(task_id = id, "Patch carries no changes");
        }

        task.apply_update(patch);
        let task = self.repository.save(task).await?;

        info!(task_id = task.id, status = %task.status, "Task updated");
        Ok(Some(task))
    }

    /// Deletes a task if it exists
    ///
    /// Returns `false` without issuing a delete when the task is missing.
    pub async fn delete_task(&self, id: i64) -> RepositoryResult<bool> {
        if !self.repository.exists_by_id(id).await? {
            debug!(task_id = id, "Delete skipped, task not found");
            return Ok(false);
        }

        self.repository.delete_by_id(id).await?;
        info!(task_id = id, "Task deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryTaskRepository, MockTaskRepository};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_task() -> Task {
        let now = Utc::now();
        Task {
            id: 1,
            title: "Test Task".to_string(),
            description: Some("Test Description".to_string()),
            user_id: 1,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_create() -> CreateTask {
        CreateTask {
            title: "Test Task".to_string(),
            description: Some("Test Description".to_string()),
            user_id: 1,
            status: TaskStatus::Pending,
        }
    }

    fn service_with(mock: MockTaskRepository) -> TaskService {
        TaskService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_get_all_tasks() {
        let mut mock = MockTaskRepository::new();
        let task = sample_task();
        mock.expect_find_all()
            .times(1)
            .returning(move || Ok(vec![task.clone()]));

        let tasks = service_with(mock).get_all_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Test Task");
    }

    #[tokio::test]
    async fn test_get_task_by_id() {
        let mut mock = MockTaskRepository::new();
        let task = sample_task();
        mock.expect_find_by_id()
            .with(eq(1))
            .returning(move |_| Ok(Some(task.clone())));

        let found = service_with(mock).get_task_by_id(1).await.unwrap();
        assert_eq!(found.map(|t| t.title).as_deref(), Some("Test Task"));
    }

    #[tokio::test]
    async fn test_get_task_by_unknown_id_is_none() {
        let mut mock = MockTaskRepository::new();
        mock.expect_find_by_id().with(eq(99)).returning(|_| Ok(None));

        assert!(service_with(mock).get_task_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_task() {
        let mut mock = MockTaskRepository::new();
        let task = sample_task();
        mock.expect_insert()
            .with(eq(sample_create()))
            .times(1)
            .returning(move |_| Ok(task.clone()));

        let created = service_with(mock).create_task(sample_create()).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.title, "Test Task");
    }

    #[tokio::test]
    async fn test_update_task() {
        let mut mock = MockTaskRepository::new();
        let task = sample_task();
        mock.expect_find_by_id()
            .with(eq(1))
            .returning(move |_| Ok(Some(task.clone())));
        mock.expect_save()
            .withf(|task: &Task| {
                task.id == 1
                    && task.user_id == 1
                    && task.title == "Updated Task"
                    && task.description.as_deref() == Some("Updated Description")
                    && task.status == TaskStatus::InProgress
            })
            .times(1)
            .returning(Ok);

        let result = service_with(mock)
            .update_task(
                1,
                UpdateTask {
                    title: Some("Updated Task".to_string()),
                    description: Some("Updated Description".to_string()),
                    status: Some(TaskStatus::InProgress),
                },
            )
            .await
            .unwrap();

        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_update_title_only_keeps_description_and_status() {
        let mut mock = MockTaskRepository::new();
        let task = sample_task();
        mock.expect_find_by_id()
            .returning(move |_| Ok(Some(task.clone())));
        mock.expect_save().times(1).returning(Ok);

        let updated = service_with(mock)
            .update_task(
                1,
                UpdateTask {
                    title: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description.as_deref(), Some("Test Description"));
        assert_eq!(updated.status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn test_update_unknown_task_never_saves() {
        let mut mock = MockTaskRepository::new();
        mock.expect_find_by_id().with(eq(42)).returning(|_| Ok(None));
        mock.expect_save().times(0);

        let result = service_with(mock)
            .update_task(
                42,
                UpdateTask {
                    title: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_task() {
        let mut mock = MockTaskRepository::new();
        mock.expect_exists_by_id().with(eq(1)).returning(|_| Ok(true));
        mock.expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        assert!(service_with(mock).delete_task(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_task_issues_no_delete() {
        let mut mock = MockTaskRepository::new();
        mock.expect_exists_by_id().with(eq(7)).returning(|_| Ok(false));
        mock.expect_delete_by_id().times(0);

        assert!(!service_with(mock).delete_task(7).await.unwrap());
    }

    #[tokio::test]
    async fn test_tasks_for_user_picks_query_by_status() {
        let mut mock = MockTaskRepository::new();
        mock.expect_find_by_user_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(vec![]));
        mock.expect_find_by_user_id_and_status()
            .with(eq(1), eq(TaskStatus::Completed))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = service_with(mock);
        service.get_tasks_for_user(1, None).await.unwrap();
        service
            .get_tasks_for_user(1, Some(TaskStatus::Completed))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_lifecycle_against_in_memory_repository() {
        let service = TaskService::new(Arc::new(InMemoryTaskRepository::new()));

        let created = service.create_task(sample_create()).await.unwrap();
        assert_eq!(created.title, "Test Task");
        assert_eq!(created.description.as_deref(), Some("Test Description"));
        assert_eq!(created.user_id, 1);
        assert_eq!(created.status, TaskStatus::Pending);

        let found = service.get_task_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);

        assert!(service.delete_task(created.id).await.unwrap());
        assert!(service.get_task_by_id(created.id).await.unwrap().is_none());
        assert!(!service.delete_task(created.id).await.unwrap());
    }
}
