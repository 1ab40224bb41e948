//! Department model matching the remote API's wire format.
//!
//! The API speaks snake_case JSON; field names below are the wire names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A department record in the managed hierarchy.
///
/// `parent_id` references another record's `id` within the same loaded
/// collection; records without one are roots. Some API responses embed the
/// direct children of a record; ancestry computations ignore that field and
/// work from the flat list instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub level: i64,
    pub employees: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambassador: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Department>>,
}

impl Department {
    /// Whether this record sits at the top of the hierarchy.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Request body for creating a new department.
///
/// Doubles as the in-progress draft behind the creation dialog: mutated by
/// the form fields, discarded on successful submission or cancellation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewDepartment {
    pub name: String,
    pub employees: i64,
    pub ambassador: String,
    pub parent_id: Option<i64>,
}

impl NewDepartment {
    /// Check the draft before it is sent anywhere.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Department name is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Request body for partially updating an existing department.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDepartment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambassador: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<i64>>,
}
