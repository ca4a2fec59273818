//! Database migration commands.
//!
//! # Usage
//!
//! ```bash
//! thankly migrate
//! ```
//!
//! # Environment Variables
//!
//! - `BACKEND_DATABASE_URL` - `PostgreSQL` connection string
//!
//! Migration files live in `crates/backend/migrations/`. The tower-sessions
//! store provisions its own tables afterwards.

use sqlx::PgPool;
use tower_sessions_sqlx_store::PostgresStore;

/// Errors that can occur while migrating.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run backend database migrations.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or a migration cannot be applied.
pub async fn backend() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("BACKEND_DATABASE_URL")
        .map_err(|_| MigrationError::MissingEnvVar("BACKEND_DATABASE_URL"))?;

    tracing::info!("Connecting to backend database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Running backend migrations...");
    sqlx::migrate!("../backend/migrations").run(&pool).await?;

    tracing::info!("Provisioning session store tables...");
    PostgresStore::new(pool.clone()).migrate().await?;

    tracing::info!("Backend migrations complete!");
    Ok(())
}
