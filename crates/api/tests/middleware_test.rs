use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use pretty_assertions::assert_eq;
use serde_json::Value;
use availo_api::middleware::error_handling::AppError;
use availo_core::errors::AvailoError;

#[test]
fn test_not_found_maps_to_404() {
    let response = AppError(AvailoError::NotFound("Schedule not found".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_validation_maps_to_400() {
    let response = AppError(AvailoError::Validation("Bad dates".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_auth_failures_map_to_401() {
    let credentials = AppError(AvailoError::InvalidCredentials).into_response();
    let token = AppError(AvailoError::InvalidToken).into_response();

    assert_eq!(credentials.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(token.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_database_faults_map_to_500() {
    let response = AppError(AvailoError::Database(eyre::eyre!("connection reset"))).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_internal_faults_map_to_500_and_keep_their_label() {
    // Hashing and token-signing faults are internal, not persistence errors
    let report = eyre::eyre!("signing key rejected");
    let response = AppError(AvailoError::Internal(report.into())).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Internal server error: signing key rejected");
}

#[tokio::test]
async fn test_error_body_is_json_with_error_field() {
    let response = AppError(AvailoError::NotFound("User not found".to_string())).into_response();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"], "Resource not found: User not found");
}

#[test]
fn test_repository_errors_convert_to_database_faults() {
    let err: AppError = eyre::eyre!("query failed").into();
    assert!(matches!(err.0, AvailoError::Database(_)));
}
