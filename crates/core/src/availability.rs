//! # Availability Engine
//!
//! Decision logic determining whether a professional is currently available,
//! and if not, when they next will be. The engine is a pure rules module:
//! the API layer fetches the schedule containing the query instant (bounds
//! inclusive on both ends) together with its linked appointments, optionally
//! the next upcoming available schedule, and hands the projections to
//! [`decide`]. No state is held between queries; every evaluation reflects
//! the store at the moment of the request.

use chrono::{DateTime, Utc};

use crate::models::availability::GetAvailabilityResponse;

/// Projection of the schedule block containing the query instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentBlock {
    /// The professional marked this block as accepting work.
    pub available: bool,
    /// At least one appointment is linked to the block.
    pub occupied: bool,
}

impl CurrentBlock {
    /// A block is open when it is marked available and nothing occupies it.
    pub fn is_open(&self) -> bool {
        self.available && !self.occupied
    }
}

/// Outcome of an availability evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// A current block exists, is marked available, and has no appointment.
    Available,
    /// Busy or unavailable now; the next available block starts at this instant.
    NextAt(DateTime<Utc>),
    /// Busy or unavailable now, and no later available block was found.
    NoneUpcoming,
    /// No schedule contains the query instant at all.
    NoCurrentSchedule,
}

/// Evaluates availability from the current block and the next available start.
///
/// `next_start` only matters when the current block exists but is not open;
/// callers may skip the forward search entirely when `current.is_open()`.
pub fn decide(current: Option<CurrentBlock>, next_start: Option<DateTime<Utc>>) -> Decision {
    match current {
        None => Decision::NoCurrentSchedule,
        Some(block) if block.is_open() => Decision::Available,
        Some(_) => match next_start {
            Some(start) => Decision::NextAt(start),
            None => Decision::NoneUpcoming,
        },
    }
}

/// Whole minutes until the next available start, truncated toward zero.
///
/// Never negative: a start in the past clamps to zero rather than reporting
/// a negative wait.
pub fn minutes_until(now: DateTime<Utc>, next_start: DateTime<Utc>) -> i64 {
    let seconds = (next_start - now).num_seconds();
    if seconds <= 0 {
        0
    } else {
        seconds / 60
    }
}

/// Shapes a [`Decision`] into the wire response for a user.
pub fn to_response(
    user_id: uuid::Uuid,
    now: DateTime<Utc>,
    decision: Decision,
) -> GetAvailabilityResponse {
    match decision {
        Decision::Available => GetAvailabilityResponse {
            user_id,
            is_available: true,
            message: Some("Available".to_string()),
            time_until_next_availability: None,
        },
        Decision::NextAt(start) => GetAvailabilityResponse {
            user_id,
            is_available: false,
            message: Some(format!("Unavailable until {}", start.format("%Y-%m-%d %H:%M"))),
            time_until_next_availability: Some(minutes_until(now, start)),
        },
        Decision::NoneUpcoming => GetAvailabilityResponse {
            user_id,
            is_available: false,
            message: Some("No more available schedules today".to_string()),
            time_until_next_availability: None,
        },
        Decision::NoCurrentSchedule => GetAvailabilityResponse {
            user_id,
            is_available: false,
            message: Some("No current schedules found".to_string()),
            time_until_next_availability: None,
        },
    }
}
