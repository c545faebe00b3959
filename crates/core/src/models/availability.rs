use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAvailabilityResponse {
    pub user_id: Uuid,
    pub is_available: bool,
    pub message: Option<String>,
    pub time_until_next_availability: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub professional_id: Uuid,
    pub new_availability: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvailabilityResponse {
    pub success: bool,
    pub updated_availability: bool,
    pub message: Option<String>,
}
