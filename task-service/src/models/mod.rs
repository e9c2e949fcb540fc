/// Data model of the task service
///
/// - `task`: The `Task` entity, its status enum, and the create/update inputs

pub mod task;
