//! # Report Handlers
//!
//! Report generation over a user-selected date range, and retrieval of
//! previously generated reports. Generation validates its inputs softly:
//! malformed dates or an unknown report type come back as a
//! `success: false` body rather than a rejected request.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use availo_core::{
    errors::AvailoError,
    models::report::{GenerateReportRequest, GenerateReportResponse, ReportDetails, ReportType},
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn generate_report(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<GenerateReportRequest>,
) -> Result<Json<GenerateReportResponse>, AppError> {
    let dates_valid = NaiveDate::parse_from_str(&payload.start_date, "%Y-%m-%d").is_ok()
        && NaiveDate::parse_from_str(&payload.end_date, "%Y-%m-%d").is_ok();
    if !dates_valid {
        return Ok(Json(GenerateReportResponse {
            success: false,
            report_id: None,
            message: "Invalid date format. Please use YYYY-MM-DD.".to_string(),
            report_url: None,
        }));
    }

    let report_type = match ReportType::from_str(&payload.report_type) {
        Ok(report_type) => report_type,
        Err(_) => {
            return Ok(Json(GenerateReportResponse {
                success: false,
                report_id: None,
                message: "Invalid report type provided.".to_string(),
                report_url: None,
            }));
        }
    };

    let content = format!(
        "Report from {} to {} for user {} on {}.",
        payload.start_date,
        payload.end_date,
        payload.user_id,
        payload.data_points.join(", ")
    );

    let report = availo_db::repositories::report::create_report(
        &state.db_pool,
        payload.user_id,
        &content,
        report_type.as_str(),
    )
    .await
    .map_err(AvailoError::Database)?;

    let report_url = format!("{}/{}", state.config.report_base_url, report.id);

    Ok(Json(GenerateReportResponse {
        success: true,
        report_id: Some(report.id),
        message: "Report generated successfully.".to_string(),
        report_url: Some(report_url),
    }))
}

#[axum::debug_handler]
pub async fn get_report(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportDetails>, AppError> {
    let report = availo_db::repositories::report::get_report_by_id(&state.db_pool, id)
        .await
        .map_err(AvailoError::Database)?
        .ok_or_else(|| AvailoError::NotFound(format!("Report with id {} not found", id)))?;

    let response = ReportDetails {
        id: report.id,
        user_id: report.user_id,
        content: report.content,
        report_type: ReportType::from_str(&report.report_type)?,
        created_at: report.created_at,
        updated_at: report.updated_at,
    };

    Ok(Json(response))
}
