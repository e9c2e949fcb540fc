/// User business logic
///
/// Read and create only. Lookups that miss return `Ok(None)`.

use crate::models::user::{CreateUser, User};
use crate::repository::UserRepository;
use std::sync::Arc;
use taskhub_shared::error::RepositoryResult;
use tracing::{debug, info};

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_users(&self) -> RepositoryResult<Vec<User>> {
        self.repository.find_all().await
    }

    pub async fn get_user_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        debug!(user_id = id, "Looking up user");
        self.repository.find_by_id(id).await
    }

    /// Persists a new user as given
    pub async fn create_user(&self, user: CreateUser) -> RepositoryResult<User> {
        let user = self.repository.insert(user).await?;
        info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::eq;
    use taskhub_shared::error::RepositoryError;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: 1,
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            name: Some("Test User".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_create() -> CreateUser {
        CreateUser {
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            name: Some("Test User".to_string()),
        }
    }

    #[tokio::test]
    async fn test_get_all_users() {
        let mut mock = MockUserRepository::new();
        let user = sample_user();
        mock.expect_find_all()
            .times(1)
            .returning(move || Ok(vec![user.clone()]));

        let users = UserService::new(Arc::new(mock)).get_all_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "testuser");
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let mut mock = MockUserRepository::new();
        let user = sample_user();
        mock.expect_find_by_id()
            .with(eq(1))
            .returning(move |_| Ok(Some(user.clone())));
        mock.expect_find_by_id().with(eq(2)).returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock));
        let found = service.get_user_by_id(1).await.unwrap();
        assert_eq!(found.map(|u| u.username).as_deref(), Some("testuser"));
        assert!(service.get_user_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_user() {
        let mut mock = MockUserRepository::new();
        let user = sample_user();
        mock.expect_insert()
            .with(eq(sample_create()))
            .times(1)
            .returning(move |_| Ok(user.clone()));

        let created = UserService::new(Arc::new(mock))
            .create_user(sample_create())
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.username, "testuser");
    }

    #[tokio::test]
    async fn test_create_user_propagates_conflict() {
        let mut mock = MockUserRepository::new();
        mock.expect_insert()
            .returning(|_| Err(RepositoryError::Conflict("users_username_key".to_string())));

        let err = UserService::new(Arc::new(mock))
            .create_user(sample_create())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }
}
