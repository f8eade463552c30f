//! Database Module
//!
//! PostgreSQL connection pool, schema setup, and transaction management.

pub mod unit_of_work;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::shared::error::AppError;

pub use unit_of_work::TransactionContext;

/// Create a PostgreSQL connection pool
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect(&settings.url)
        .await
}

/// Apply the bundled schema
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Map a foreign-key violation to `NotFound` naming the missing record,
/// passing other errors through.
pub(crate) fn map_foreign_key(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => AppError::NotFound(
            format!("{} not found", referenced_entity(db_err.constraint())),
        ),
        _ => AppError::Database(err),
    }
}

/// Human name of the table a `<table>_<column>_fkey` constraint points at.
fn referenced_entity(constraint: Option<&str>) -> &'static str {
    let constraint = constraint.unwrap_or_default();
    if constraint.contains("workout_type_id") {
        "Workout type"
    } else if constraint.contains("schedule_id") {
        "Workout schedule"
    } else if constraint.contains("trainer_id") {
        "Trainer"
    } else if constraint.contains("member_id") {
        "Member"
    } else if constraint.contains("club_id") {
        "Club"
    } else {
        "Referenced record"
    }
}
