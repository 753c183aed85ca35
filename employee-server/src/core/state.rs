//! Server state

use std::sync::Arc;

use anyhow::Context;
use sqlx::SqlitePool;

use crate::core::Config;
use crate::db;
use crate::db::repository::SqliteEmployeeRepository;
use crate::services::EmployeeService;

/// Shared application state handed to every handler.
///
/// Cheap to clone; every member is pool- or Arc-backed.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
    pub employees: EmployeeService,
}

impl ServerState {
    /// Open the database, apply the schema and wire up the services
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)
            .with_context(|| format!("failed to create work dir {}", config.work_dir))?;

        let pool = db::connect(config).await.context("failed to open database")?;
        db::init_schema(&pool)
            .await
            .context("failed to create schema")?;

        Ok(Self::with_pool(config.clone(), pool))
    }

    /// Build state around an existing pool (the schema must already exist)
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        let employees = EmployeeService::new(Arc::new(SqliteEmployeeRepository::new(pool.clone())));
        Self {
            config: Arc::new(config),
            pool,
            employees,
        }
    }
}
