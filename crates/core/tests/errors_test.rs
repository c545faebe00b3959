use std::error::Error;
use availo_core::errors::AvailoError;

#[test]
fn test_availo_error_display() {
    let not_found = AvailoError::NotFound("Schedule not found".to_string());
    let validation = AvailoError::Validation("Invalid input".to_string());
    let credentials = AvailoError::InvalidCredentials;
    let token = AvailoError::InvalidToken;
    let database = AvailoError::Database(eyre::eyre!("Database connection failed"));
    let internal = AvailoError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Schedule not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(credentials.to_string(), "Invalid login credentials");
    assert_eq!(token.to_string(), "Invalid or expired token");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_uniform_credentials_message() {
    // Unknown user and wrong password must be indistinguishable to callers
    let unknown_user = AvailoError::InvalidCredentials;
    let wrong_password = AvailoError::InvalidCredentials;

    assert_eq!(unknown_user.to_string(), wrong_password.to_string());
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let availo_error = AvailoError::Internal(Box::new(io_error));

    assert!(availo_error.source().is_some());
}
