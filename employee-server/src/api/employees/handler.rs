//! Employee API handlers
//!
//! Handlers validate, call the service and format the response; they never
//! touch storage directly. Mutating routes answer with the plain-text
//! confirmation the API contract documents.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::extract::AppJson;
use crate::core::ServerState;
use crate::db::models::{Employee, EmployeePayload};
use crate::utils::validation::validate_employee;
use crate::utils::{AppError, AppResult};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.list().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.get(id).await?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<EmployeePayload>,
) -> AppResult<(StatusCode, String)> {
    let data = validate_employee(&payload).map_err(AppError::Validation)?;
    let employee = state.employees.create(data).await?;
    Ok((
        StatusCode::CREATED,
        format!("Employee with id: {} created successfully!", employee.id),
    ))
}

/// Update an existing employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<EmployeePayload>,
) -> AppResult<String> {
    let data = validate_employee(&payload).map_err(AppError::Validation)?;
    state.employees.update(id, data).await?;
    Ok(format!("Employee with id: {id} updated successfully!"))
}

/// Delete an employee
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<String> {
    state.employees.delete(id).await?;
    Ok(format!("Employee with id: {id} deleted successfully!"))
}
