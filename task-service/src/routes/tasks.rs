/// Task endpoints
///
/// # Endpoints
///
/// - `GET    /api/tasks` - List tasks (optional `userId`, `status` filters)
/// - `GET    /api/tasks/:id` - Get one task
/// - `POST   /api/tasks` - Create a task
/// - `PUT    /api/tasks/:id` - Merge a partial update into a task
/// - `DELETE /api/tasks/:id` - Delete a task
///
/// Bodies use camelCase keys and SCREAMING_SNAKE_CASE statuses:
///
/// ```json
/// {
///   "id": 1,
///   "title": "Write report",
///   "description": null,
///   "userId": 1,
///   "status": "IN_PROGRESS",
///   "createdAt": "2025-01-04T12:00:00Z",
///   "updatedAt": "2025-01-04T12:30:00Z"
/// }
/// ```

use crate::{
    models::task::{CreateTask, Task, TaskStatus, UpdateTask},
    service::TaskService,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskhub_shared::error::{validate_request, ApiError, ApiResult};

/// Query string of `GET /api/tasks`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    /// Only tasks owned by this user
    pub user_id: Option<i64>,

    /// Only tasks in this status; requires `userId`
    pub status: Option<TaskStatus>,
}

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Task {} not found", id))
}

/// List tasks
///
/// # Errors
///
/// - `400 Bad Request`: `status` given without `userId`
pub async fn list_tasks(
    State(service): State<TaskService>,
    Query(filter): Query<TaskFilter>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = match (filter.user_id, filter.status) {
        (Some(user_id), status) => service.get_tasks_for_user(user_id, status).await?,
        (None, Some(_)) => {
            return Err(ApiError::BadRequest(
                "The status filter requires userId".to_string(),
            ))
        }
        (None, None) => service.get_all_tasks().await?,
    };

    Ok(Json(tasks))
}

/// Get a task by id
///
/// # Errors
///
/// - `404 Not Found`: No task with that id
pub async fn get_task(
    State(service): State<TaskService>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Task>> {
    service
        .get_task_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Create a task
///
/// ```text
/// POST /api/tasks
/// Content-Type: application/json
///
/// { "title": "Write report", "userId": 1 }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Title empty or too long
pub async fn create_task(
    State(service): State<TaskService>,
    Json(req): Json<CreateTask>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    validate_request(&req)?;

    let task = service.create_task(req).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Merge a partial update into a task
///
/// Omitted or blank fields keep their current value.
///
/// # Errors
///
/// - `404 Not Found`: No task with that id
/// - `422 Unprocessable Entity`: A field exceeds its length limit
pub async fn update_task(
    State(service): State<TaskService>,
    Path(id): Path<i64>,
    Json(patch): Json<UpdateTask>,
) -> ApiResult<Json<Task>> {
    validate_request(&patch)?;

    service
        .update_task(id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Delete a task
///
/// # Errors
///
/// - `404 Not Found`: No task with that id
pub async fn delete_task(
    State(service): State<TaskService>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if service.delete_task(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
