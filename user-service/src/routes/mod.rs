/// HTTP route handlers
///
/// - `users`: User endpoints under `/api/users`

pub mod users;
