/// Route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `home`: Home view
/// - `health`: Health check endpoint
/// - `rooms`: Room CRUD (create, list, update, delete)
/// - `users`: Registration, login, logout

pub mod health;
pub mod home;
pub mod rooms;
pub mod users;
