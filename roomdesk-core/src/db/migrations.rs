/// Database migration runner
///
/// Migrations live in `roomdesk-core/migrations/` and are embedded into the
/// binary with `sqlx::migrate!`, so deployments never depend on the source
/// tree being present.
///
/// # Example
///
/// ```no_run
/// use roomdesk_core::db::migrations::{ensure_database_exists, run_migrations};
/// use roomdesk_core::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DatabaseConfig::default();
/// ensure_database_exists(&config.url).await?;
///
/// let pool = create_pool(config).await?;
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use tracing::{debug, info, warn};

/// Runs all pending database migrations
///
/// # Errors
///
/// Returns an error if a migration file is malformed or fails to execute.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("./migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}

/// Creates the database file if it doesn't exist
///
/// # Errors
///
/// Returns an error if the file cannot be created (e.g. the directory is not
/// writable).
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    if !Sqlite::database_exists(database_url).await? {
        info!("Database does not exist, creating it");
        Sqlite::create_database(database_url).await?;
        info!("Database created successfully");
    } else {
        debug!("Database already exists");
    }

    Ok(())
}
