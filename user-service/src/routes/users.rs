/// User endpoints
///
/// # Endpoints
///
/// - `GET  /api/users` - List users
/// - `GET  /api/users/:id` - Get one user
/// - `POST /api/users` - Register a user
///
/// ```json
/// {
///   "id": 1,
///   "username": "testuser",
///   "email": "test@example.com",
///   "name": "Test User",
///   "createdAt": "2025-01-04T12:00:00Z",
///   "updatedAt": "2025-01-04T12:00:00Z"
/// }
/// ```

use crate::{
    models::user::{CreateUser, User},
    service::UserService,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskhub_shared::error::{validate_request, ApiError, ApiResult};

pub async fn list_users(State(service): State<UserService>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(service.get_all_users().await?))
}

/// Get a user by id
///
/// # Errors
///
/// - `404 Not Found`: No user with that id
pub async fn get_user(
    State(service): State<UserService>,
    Path(id): Path<i64>,
) -> ApiResult<Json<User>> {
    service
        .get_user_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("User {} not found", id)))
}

/// Register a user
///
/// # Errors
///
/// - `409 Conflict`: Username already taken
/// - `422 Unprocessable Entity`: Invalid username, email or name
pub async fn create_user(
    State(service): State<UserService>,
    Json(req): Json<CreateUser>,
) -> ApiResult<(StatusCode, Json<User>)> {
    validate_request(&req)?;

    let user = service.create_user(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
