use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use sqlx::error::{DatabaseError, ErrorKind};
use availo_db::is_unique_violation;

/// Stand-in for a driver-level error carrying a constraint-violation kind.
#[derive(Debug)]
struct StubDbError {
    unique: bool,
}

impl fmt::Display for StubDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unique {
            f.write_str("duplicate key value violates unique constraint \"users_email_key\"")
        } else {
            f.write_str("deadlock detected")
        }
    }
}

impl StdError for StubDbError {}

impl DatabaseError for StubDbError {
    fn message(&self) -> &str {
        if self.unique {
            "duplicate key value violates unique constraint \"users_email_key\""
        } else {
            "deadlock detected"
        }
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        if self.unique {
            Some(Cow::Borrowed("23505"))
        } else {
            Some(Cow::Borrowed("40P01"))
        }
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        if self.unique {
            ErrorKind::UniqueViolation
        } else {
            ErrorKind::Other
        }
    }
}

fn report_for(unique: bool) -> eyre::Report {
    sqlx::Error::Database(Box::new(StubDbError { unique })).into()
}

#[test]
fn test_detects_unique_constraint_violation() {
    assert!(is_unique_violation(&report_for(true)));
}

#[test]
fn test_other_database_errors_are_not_unique_violations() {
    assert!(!is_unique_violation(&report_for(false)));
}

#[test]
fn test_non_database_errors_are_not_unique_violations() {
    assert!(!is_unique_violation(&eyre::eyre!("connection refused")));
    assert!(!is_unique_violation(&sqlx::Error::RowNotFound.into()));
}
