/// Data model of the user service
///
/// - `user`: The `User` entity and its create input

pub mod user;
