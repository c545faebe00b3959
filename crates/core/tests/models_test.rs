use std::str::FromStr;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{from_str, json, to_value};
use availo_core::{
    errors::AvailoError,
    models::{
        availability::GetAvailabilityResponse,
        report::ReportType,
        schedule::{CreateScheduleRequest, UpdateScheduleRequest},
        user::{Role, UpdateUserRequest},
    },
};
use uuid::Uuid;

#[test]
fn test_role_parsing() {
    assert_eq!(Role::from_str("Professional").unwrap(), Role::Professional);
    assert_eq!(
        Role::from_str("Administrator").unwrap(),
        Role::Administrator
    );
    assert_eq!(Role::from_str("ITSupport").unwrap(), Role::ITSupport);

    let err = Role::from_str("Janitor").unwrap_err();
    assert!(matches!(err, AvailoError::Validation(_)));
}

#[test]
fn test_role_round_trips_through_storage_form() {
    for role in [Role::Professional, Role::Administrator, Role::ITSupport] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_report_type_parsing() {
    assert_eq!(
        ReportType::from_str("SystemUsage").unwrap(),
        ReportType::SystemUsage
    );

    let err = ReportType::from_str("Gossip").unwrap_err();
    assert!(matches!(err, AvailoError::Validation(_)));
}

#[test]
fn test_availability_response_wire_format() {
    let user_id = Uuid::new_v4();
    let response = GetAvailabilityResponse {
        user_id,
        is_available: false,
        message: Some("Unavailable until 2024-03-14 11:30".to_string()),
        time_until_next_availability: Some(60),
    };

    let value = to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({
            "userId": user_id,
            "isAvailable": false,
            "message": "Unavailable until 2024-03-14 11:30",
            "timeUntilNextAvailability": 60,
        })
    );
}

#[test]
fn test_create_schedule_request_wire_format() {
    let user_id = Uuid::new_v4();
    let body = format!(
        r#"{{
            "userId": "{}",
            "startTime": "2024-03-14T10:00:00Z",
            "endTime": "2024-03-14T11:00:00Z",
            "title": "Consultation",
            "description": null,
            "available": true
        }}"#,
        user_id
    );

    let request: CreateScheduleRequest = from_str(&body).unwrap();

    assert_eq!(request.user_id, user_id);
    assert_eq!(
        request.start_time,
        Utc.with_ymd_and_hms(2024, 3, 14, 10, 0, 0).unwrap()
    );
    assert_eq!(request.title, "Consultation");
    assert_eq!(request.description, None);
    assert!(request.available);
}

#[test]
fn test_schedule_patch_distinguishes_omit_from_null() {
    // Omitted: description untouched
    let patch: UpdateScheduleRequest = from_str(r#"{"title": "New title"}"#).unwrap();
    assert_eq!(patch.title.as_deref(), Some("New title"));
    assert_eq!(patch.description, None);

    // Explicit null: description cleared
    let patch: UpdateScheduleRequest = from_str(r#"{"description": null}"#).unwrap();
    assert_eq!(patch.description, Some(None));

    // Explicit value: description replaced
    let patch: UpdateScheduleRequest = from_str(r#"{"description": "Walk-ins"}"#).unwrap();
    assert_eq!(patch.description, Some(Some("Walk-ins".to_string())));
}

#[test]
fn test_user_patch_defaults_to_no_changes() {
    let patch: UpdateUserRequest = from_str("{}").unwrap();

    assert_eq!(patch.email, None);
    assert_eq!(patch.first_name, None);
    assert_eq!(patch.last_name, None);
    assert_eq!(patch.role, None);
}

#[test]
fn test_user_patch_accepts_partial_fields() {
    let patch: UpdateUserRequest = from_str(r#"{"firstName": "Ada"}"#).unwrap();

    assert_eq!(patch.first_name.as_deref(), Some("Ada"));
    assert_eq!(patch.last_name, None);
    assert_eq!(patch.email, None);
    assert_eq!(patch.role, None);
}
