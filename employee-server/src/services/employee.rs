//! Employee service
//!
//! Orchestrates repository calls and owns the not-found rule: every
//! operation taking an id resolves it first and fails with
//! [`AppError::NotFound`] when the row is absent. Each operation is a
//! single logical storage step; no retries, no compensation.

use std::sync::Arc;

use tracing::info;

use crate::db::models::{Employee, EmployeeCreate};
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// All employees in insertion order; empty when none exist
    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.repo.find_all().await?)
    }

    /// Single employee by id
    pub async fn get(&self, id: i64) -> AppResult<Employee> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    /// Persist a validated candidate; the database assigns the id
    pub async fn create(&self, data: EmployeeCreate) -> AppResult<Employee> {
        let employee = self.repo.insert(data).await?;
        info!(id = employee.id, "Employee created");
        Ok(employee)
    }

    /// Overwrite name, salary and department of an existing employee.
    /// The id never changes. Concurrent updates to the same id race at the
    /// database with last-write-wins.
    pub async fn update(&self, id: i64, data: EmployeeCreate) -> AppResult<()> {
        let mut employee = self.get(id).await?;
        employee.name = data.name;
        employee.salary = data.salary;
        employee.department = data.department;
        self.repo.update(&employee).await?;
        info!(id, "Employee updated");
        Ok(())
    }

    /// Remove an existing employee (hard delete)
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let employee = self.get(id).await?;
        self.repo.delete(employee.id).await?;
        info!(id, "Employee deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoResult;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory repository double
    #[derive(Default)]
    struct MemoryRepository {
        rows: Mutex<BTreeMap<i64, Employee>>,
        next_id: Mutex<i64>,
    }

    #[async_trait]
    impl EmployeeRepository for MemoryRepository {
        async fn find_all(&self) -> RepoResult<Vec<Employee>> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn insert(&self, data: EmployeeCreate) -> RepoResult<Employee> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let employee = Employee {
                id: *next_id,
                name: data.name,
                salary: data.salary,
                department: data.department,
            };
            self.rows
                .lock()
                .unwrap()
                .insert(employee.id, employee.clone());
            Ok(employee)
        }

        async fn update(&self, employee: &Employee) -> RepoResult<()> {
            self.rows
                .lock()
                .unwrap()
                .insert(employee.id, employee.clone());
            Ok(())
        }

        async fn delete(&self, id: i64) -> RepoResult<()> {
            self.rows.lock().unwrap().remove(&id);
            Ok(())
        }
    }

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(MemoryRepository::default()))
    }

    fn candidate(name: &str, salary: i64, department: &str) -> EmployeeCreate {
        EmployeeCreate {
            name: name.to_string(),
            salary,
            department: department.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_record() {
        let service = service();
        let created = service
            .create(candidate("mockName", 100, "mockDept"))
            .await
            .unwrap();
        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "mockName");
        assert_eq!(fetched.salary, 100);
        assert_eq!(fetched.department, "mockDept");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let err = service().get(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(42)));
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_preserves_id() {
        let service = service();
        let created = service
            .create(candidate("mockName", 100, "mockDept"))
            .await
            .unwrap();

        service
            .update(created.id, candidate("newName", 250, "newDept"))
            .await
            .unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "newName");
        assert_eq!(fetched.salary, 250);
        assert_eq!(fetched.department, "newDept");
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let err = service()
            .update(11, candidate("newName", 250, "newDept"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(11)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = service();
        let created = service
            .create(candidate("mockName", 100, "mockDept"))
            .await
            .unwrap();
        service.delete(created.id).await.unwrap();
        assert!(matches!(
            service.get(created.id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let err = service().delete(7).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(7)));
    }

    #[tokio::test]
    async fn list_returns_all_in_insertion_order() {
        let service = service();
        assert!(service.list().await.unwrap().is_empty());
        service.create(candidate("one", 1, "first")).await.unwrap();
        service.create(candidate("two", 2, "second")).await.unwrap();
        let names: Vec<_> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["one", "two"]);
    }
}
