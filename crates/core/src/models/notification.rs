use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendNotificationRequest {
    pub recipient_id: Uuid,
    pub message: String,
    /// Delivery channels, any of "email", "sms", "in_app".
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendNotificationResponse {
    pub success: bool,
    pub failed_channels: Vec<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNotificationPreferencesRequest {
    pub user_id: Uuid,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub in_app_notifications: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNotificationPreferencesResponse {
    pub user_id: Uuid,
    pub status: String,
}
