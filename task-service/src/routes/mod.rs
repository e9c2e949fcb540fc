/// HTTP route handlers
///
/// - `tasks`: Task CRUD endpoints under `/api/tasks`
///
/// `GET /health` comes from `taskhub_shared::health`.

pub mod tasks;
