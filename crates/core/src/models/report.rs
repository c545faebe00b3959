use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AvailoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    Activity,
    SystemUsage,
    Compliance,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Activity => "Activity",
            ReportType::SystemUsage => "SystemUsage",
            ReportType::Compliance => "Compliance",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = AvailoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Activity" => Ok(ReportType::Activity),
            "SystemUsage" => Ok(ReportType::SystemUsage),
            "Compliance" => Ok(ReportType::Compliance),
            other => Err(AvailoError::Validation(format!(
                "Unknown report type: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    pub user_id: Uuid,
    /// YYYY-MM-DD.
    pub start_date: String,
    /// YYYY-MM-DD.
    pub end_date: String,
    pub data_points: Vec<String>,
    /// Validated against [`ReportType`]; kept as a string so an unknown
    /// value produces a soft failure response rather than a rejected body.
    pub report_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportResponse {
    pub success: bool,
    pub report_id: Option<Uuid>,
    pub message: String,
    pub report_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetails {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub report_type: ReportType,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
