use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AvailoError;

/// Role a user account holds within the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Professional,
    Administrator,
    ITSupport,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Professional => "Professional",
            Role::Administrator => "Administrator",
            Role::ITSupport => "ITSupport",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AvailoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Professional" => Ok(Role::Professional),
            "Administrator" => Ok(Role::Administrator),
            "ITSupport" => Ok(Role::ITSupport),
            other => Err(AvailoError::Validation(format!("Unknown role: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: Uuid,
    pub status: String,
}

/// Patch payload: absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserResponse {
    pub id: Uuid,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
    pub update_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email_notifications_enabled: bool,
    pub sms_notifications_enabled: bool,
    pub app_notifications_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub linked_schedules: Vec<Uuid>,
    pub notification_preferences: NotificationPreferences,
}
