/// Database layer for roomdesk
///
/// This module provides SQLite connection pooling and the migration runner.
/// Models live in the `models` module at the crate root.
///
/// # Modules
///
/// - `pool`: connection pool management with a startup health check
/// - `migrations`: sqlx migration runner over `migrations/`

pub mod migrations;
pub mod pool;
