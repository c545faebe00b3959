use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use availo_core::availability::{decide, minutes_until, to_response, CurrentBlock, Decision};
use uuid::Uuid;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 14, hour, minute, 0).unwrap()
}

#[test]
fn test_open_block_is_available() {
    let current = CurrentBlock {
        available: true,
        occupied: false,
    };

    assert_eq!(decide(Some(current), None), Decision::Available);
}

#[test]
fn test_occupied_block_searches_forward() {
    // An appointment overrides the available flag
    let current = CurrentBlock {
        available: true,
        occupied: true,
    };
    let next_start = at(11, 30);

    assert_eq!(
        decide(Some(current), Some(next_start)),
        Decision::NextAt(next_start)
    );
}

#[test]
fn test_unavailable_block_searches_forward() {
    let current = CurrentBlock {
        available: false,
        occupied: false,
    };

    assert_eq!(decide(Some(current), None), Decision::NoneUpcoming);
}

#[test]
fn test_unavailable_and_occupied_block_is_not_special() {
    // Marked unavailable with an appointment present still goes down the
    // forward-search path like any other closed block
    let current = CurrentBlock {
        available: false,
        occupied: true,
    };
    let next_start = at(15, 0);

    assert_eq!(
        decide(Some(current), Some(next_start)),
        Decision::NextAt(next_start)
    );
}

#[test]
fn test_no_current_schedule() {
    assert_eq!(decide(None, None), Decision::NoCurrentSchedule);

    // A known next start is irrelevant without a current block
    assert_eq!(decide(None, Some(at(12, 0))), Decision::NoCurrentSchedule);
}

#[rstest]
#[case(Duration::minutes(60), 60)]
#[case(Duration::minutes(90), 90)]
#[case(Duration::seconds(119), 1)]
#[case(Duration::seconds(59), 0)]
#[case(Duration::zero(), 0)]
fn test_minutes_until_truncates_toward_zero(#[case] delta: Duration, #[case] expected: i64) {
    let now = at(10, 30);
    assert_eq!(minutes_until(now, now + delta), expected);
}

#[test]
fn test_minutes_until_never_negative() {
    let now = at(10, 30);
    assert_eq!(minutes_until(now, now - Duration::minutes(5)), 0);
}

#[test]
fn test_response_for_open_schedule() {
    let user_id = Uuid::new_v4();
    let now = at(10, 30);

    let response = to_response(user_id, now, Decision::Available);

    assert_eq!(response.user_id, user_id);
    assert!(response.is_available);
    assert_eq!(response.message.as_deref(), Some("Available"));
    assert_eq!(response.time_until_next_availability, None);
}

#[test]
fn test_response_for_occupied_schedule_with_next() {
    // Schedule 10:00-11:00 with an appointment, next available at 11:30,
    // queried at 10:30: unavailable with a 60 minute wait
    let user_id = Uuid::new_v4();
    let now = at(10, 30);
    let next_start = at(11, 30);

    let current = CurrentBlock {
        available: true,
        occupied: true,
    };
    let decision = decide(Some(current), Some(next_start));
    let response = to_response(user_id, now, decision);

    assert!(!response.is_available);
    assert_eq!(response.time_until_next_availability, Some(60));
    assert_eq!(
        response.message.as_deref(),
        Some("Unavailable until 2024-03-14 11:30")
    );
}

#[test]
fn test_response_when_nothing_upcoming() {
    let user_id = Uuid::new_v4();
    let response = to_response(user_id, at(10, 30), Decision::NoneUpcoming);

    assert!(!response.is_available);
    assert_eq!(
        response.message.as_deref(),
        Some("No more available schedules today")
    );
    assert_eq!(response.time_until_next_availability, None);
}

#[test]
fn test_response_without_current_schedule() {
    let user_id = Uuid::new_v4();
    let response = to_response(user_id, at(10, 30), Decision::NoCurrentSchedule);

    assert!(!response.is_available);
    assert_eq!(response.message.as_deref(), Some("No current schedules found"));
    assert_eq!(response.time_until_next_availability, None);
}
