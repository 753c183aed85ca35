//! Repository module
//!
//! Primitive storage operations over the employee table. Handlers never
//! touch this layer directly; the service owns every call.

pub mod employee;

pub use employee::SqliteEmployeeRepository;

use async_trait::async_trait;
use thiserror::Error;

use crate::db::models::{Employee, EmployeeCreate};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// The five primitive storage operations.
///
/// Object-safe so the service can run against SQLite in production and an
/// in-memory map in tests.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All rows in insertion (id) order
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>>;

    /// Insert with a database-generated id; returns the stored row
    async fn insert(&self, data: EmployeeCreate) -> RepoResult<Employee>;

    /// Overwrite the mutable columns of an existing row by primary key
    async fn update(&self, employee: &Employee) -> RepoResult<()>;

    /// Delete by primary key
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
