//! User models

use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Display date captured at creation, e.g. `2024年3月5日`. Never updated.
    pub date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a user.
///
/// Fields are not validated here; a missing value is bound as NULL and left to the
/// table constraints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Request DTO for updating a user. Both fields are always written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    pub id: i64,
    pub message: String,
}

/// Format a date as `<year>年<month>月<day>日` without zero padding.
pub fn format_display_date(now: DateTime<Local>) -> String {
    format!("{}年{}月{}日", now.year(), now.month(), now.day())
}
