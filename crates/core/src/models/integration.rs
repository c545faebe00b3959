use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddIntegrationRequest {
    pub user_id: Uuid,
    /// External service name, e.g. "Google Calendar".
    pub service: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// RFC 3339 expiry of the access token, if the service reports one.
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddIntegrationResponse {
    pub integration_id: Option<Uuid>,
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIntegrationRequest {
    pub service: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expiry_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationDetails {
    pub id: Uuid,
    pub service: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIntegrationResponse {
    pub status: String,
    pub updated_integration: Option<IntegrationDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveIntegrationResponse {
    pub success: bool,
    pub message: String,
}
