//! Database module
//!
//! SQLite connection pool and schema bootstrap.

pub mod models;
pub mod repository;

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::core::Config;

/// Open the connection pool.
///
/// `DATABASE_URL` takes precedence when set; otherwise a database file is
/// created under the work directory (WAL mode, normal sync).
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = match &config.database_url {
        Some(url) => SqliteConnectOptions::from_str(url)?,
        None => SqliteConnectOptions::new()
            .filename(Path::new(&config.work_dir).join("employee.db"))
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal),
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // busy_timeout: wait on write contention instead of failing immediately
    sqlx::query("PRAGMA busy_timeout = 5000;").execute(&pool).await?;

    tracing::info!("Database connection established (SQLite)");
    Ok(pool)
}

/// Create the employee table when it does not exist yet.
///
/// Single-table schema, applied idempotently at startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS employee (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            salary INTEGER NOT NULL,
            department TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_creates_database_file_under_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            work_dir: dir.path().to_string_lossy().into_owned(),
            http_port: 0,
            database_url: None,
            log_level: "info".into(),
        };

        let pool = connect(&config).await.unwrap();
        init_schema(&pool).await.unwrap();
        // Schema init is idempotent
        init_schema(&pool).await.unwrap();

        assert!(dir.path().join("employee.db").exists());
    }
}
