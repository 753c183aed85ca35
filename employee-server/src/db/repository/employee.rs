//! Employee repository (SQLite)

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{EmployeeRepository, RepoResult};
use crate::db::models::{Employee, EmployeeCreate};

/// SQLite-backed [`EmployeeRepository`]
#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, name, salary, department FROM employee ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, name, salary, department FROM employee WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn insert(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let employee = sqlx::query_as::<_, Employee>(
            "INSERT INTO employee (name, salary, department) VALUES (?, ?, ?) \
             RETURNING id, name, salary, department",
        )
        .bind(&data.name)
        .bind(data.salary)
        .bind(&data.department)
        .fetch_one(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn update(&self, employee: &Employee) -> RepoResult<()> {
        sqlx::query("UPDATE employee SET name = ?, salary = ?, department = ? WHERE id = ?")
            .bind(&employee.name)
            .bind(employee.salary)
            .bind(&employee.department)
            .bind(employee.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        sqlx::query("DELETE FROM employee WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
