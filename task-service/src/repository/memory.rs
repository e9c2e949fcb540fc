/// In-memory task repository
///
/// Behaves like the PostgreSQL adapter: ids start at 1 and increase,
/// results come back ordered by id, and `save` on a vanished row fails with
/// `NotFound`. Data lives only as long as the value.

use super::TaskRepository;
use crate::models::task::{CreateTask, Task, TaskStatus};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use taskhub_shared::error::{RepositoryError, RepositoryResult};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    tasks: BTreeMap<i64, Task>,
}

#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    store: RwLock<Store>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<Task>
    where
        F: Fn(&Task) -> bool,
    {
        let store = self.store.read().await;
        store
            .tasks
            .values()
            .filter(|task| predicate(*task))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Task>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Task>> {
        Ok(self.store.read().await.tasks.get(&id).cloned())
    }

    async fn insert(&self, task: CreateTask) -> RepositoryResult<Task> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let now = Utc::now();
        let task = Task {
            id: store.last_id,
            title: task.title,
            description: task.description,
            user_id: task.user_id,
            status: task.status,
            created_at: now,
            updated_at: now,
        };

        store.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn save(&self, mut task: Task) -> RepositoryResult<Task> {
        let mut store = self.store.write().await;
        let existing = store
            .tasks
            .get_mut(&task.id)
            .ok_or(RepositoryError::NotFound {
                entity: "Task",
                id: task.id,
            })?;

        task.created_at = existing.created_at;
        task.updated_at = Utc::now();
        *existing = task.clone();

        Ok(task)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.store.write().await.tasks.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        Ok(self.store.read().await.tasks.contains_key(&id))
    }

    async fn find_by_user_id(&self, user_id: i64) -> RepositoryResult<Vec<Task>> {
        Ok(self.filtered(|task| task.user_id == user_id).await)
    }

    async fn find_by_user_id_and_status(
        &self,
        user_id: i64,
        status: TaskStatus,
    ) -> RepositoryResult<Vec<Task>> {
        Ok(self
            .filtered(|task| task.user_id == user_id && task.status == status)
            .await)
    }
}
