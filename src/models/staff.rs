use crate::entities::staff_entity;
use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum StaffRole {
    #[sea_orm(string_value = "admin")]
    #[serde(rename = "admin")]
    Admin,
    #[sea_orm(string_value = "moderator")]
    #[serde(rename = "moderator")]
    Moderator,
    #[sea_orm(string_value = "viewer")]
    #[serde(rename = "viewer")]
    Viewer,
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaffRole::Admin => write!(f, "admin"),
            StaffRole::Moderator => write!(f, "moderator"),
            StaffRole::Viewer => write!(f, "viewer"),
        }
    }
}

impl std::str::FromStr for StaffRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(StaffRole::Admin),
            "moderator" => Ok(StaffRole::Moderator),
            "viewer" => Ok(StaffRole::Viewer),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterStaffRequest {
    #[schema(example = "Priya S")]
    pub name: String,
    #[schema(example = "priya@ams.example.com")]
    pub email: String,
    #[schema(example = "+919812345678")]
    pub phone: String,
    #[schema(example = "Password123")]
    pub password: String,
    #[schema(example = "moderator")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StaffLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StaffResponse {
    pub id: i64,
    pub staff_code: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: StaffRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StaffAuthResponse {
    pub staff: StaffResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

impl From<staff_entity::Model> for StaffResponse {
    fn from(s: staff_entity::Model) -> Self {
        Self {
            id: s.id,
            staff_code: s.staff_code,
            name: s.name,
            email: s.email,
            phone: s.phone,
            role: s.role,
            created_at: s.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_staff_role_round_trip() {
        for (s, role) in [
            ("admin", StaffRole::Admin),
            ("moderator", StaffRole::Moderator),
            ("viewer", StaffRole::Viewer),
        ] {
            assert_eq!(StaffRole::from_str(s).unwrap(), role);
            assert_eq!(role.to_string(), s);
        }
        assert!(StaffRole::from_str("superuser").is_err());
    }
}
