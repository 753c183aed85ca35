//! Employee model

use serde::{Deserialize, Serialize};

/// Employee row as persisted in the `employee` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub salary: i64,
    pub department: String,
}

/// Incoming create/update body.
///
/// Every field is optional on the wire so that a missing field becomes a
/// validation failure rather than a deserialization failure. `id` is
/// accepted and ignored; ids only ever come from the database.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeePayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub department: Option<String>,
}

/// Validated employee fields, ready for persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeCreate {
    pub name: String,
    pub salary: i64,
    pub department: String,
}
