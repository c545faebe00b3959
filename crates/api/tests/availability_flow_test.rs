use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use availo_core::availability::{decide, to_response, CurrentBlock, Decision};
use availo_db::{
    mock::repositories::{MockAppointmentRepo, MockScheduleRepo},
    models::DbSchedule,
};
use uuid::Uuid;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 14, hour, minute, 0).unwrap()
}

fn schedule_row(
    user_id: Uuid,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    available: bool,
) -> DbSchedule {
    DbSchedule {
        id: Uuid::new_v4(),
        user_id,
        start_time,
        end_time,
        title: "Consultation".to_string(),
        description: None,
        available,
        created_at: start_time - Duration::days(1),
    }
}

/// Runs the availability decision against the mocked repositories the same
/// way the endpoint does: current block first, appointment count for it,
/// then the forward search only when the block is closed.
async fn evaluate(
    schedules: &MockScheduleRepo,
    appointments: &MockAppointmentRepo,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Decision {
    let current_schedule = schedules.get_current_for_user(user_id, now).await.unwrap();

    let current = match &current_schedule {
        Some(schedule) => {
            let count = appointments.count_for_schedule(schedule.id).await.unwrap();
            Some(CurrentBlock {
                available: schedule.available,
                occupied: count > 0,
            })
        }
        None => None,
    };

    let needs_next = matches!(current, Some(block) if !block.is_open());
    let next_start = if needs_next {
        schedules
            .get_next_available(user_id, now)
            .await
            .unwrap()
            .map(|schedule| schedule.start_time)
    } else {
        None
    };

    decide(current, next_start)
}

#[tokio::test]
async fn test_open_unoccupied_block_skips_forward_search() {
    let user_id = Uuid::new_v4();
    let now = at(10, 30);

    let mut schedules = MockScheduleRepo::new();
    schedules
        .expect_get_current_for_user()
        .returning(move |uid, _| Ok(Some(schedule_row(uid, at(10, 0), at(11, 0), true))));
    // No expectation on get_next_available: calling it would panic

    let mut appointments = MockAppointmentRepo::new();
    appointments.expect_count_for_schedule().returning(|_| Ok(0));

    let decision = evaluate(&schedules, &appointments, user_id, now).await;
    assert_eq!(decision, Decision::Available);
}

#[tokio::test]
async fn test_occupied_block_reports_next_opening() {
    let user_id = Uuid::new_v4();
    let now = at(10, 30);

    let mut schedules = MockScheduleRepo::new();
    schedules
        .expect_get_current_for_user()
        .returning(move |uid, _| Ok(Some(schedule_row(uid, at(10, 0), at(11, 0), true))));
    schedules
        .expect_get_next_available()
        .returning(move |uid, _| Ok(Some(schedule_row(uid, at(11, 30), at(12, 30), true))));

    let mut appointments = MockAppointmentRepo::new();
    appointments.expect_count_for_schedule().returning(|_| Ok(1));

    let decision = evaluate(&schedules, &appointments, user_id, now).await;
    assert_eq!(decision, Decision::NextAt(at(11, 30)));

    let response = to_response(user_id, now, decision);
    assert!(!response.is_available);
    assert_eq!(response.time_until_next_availability, Some(60));
    assert_eq!(
        response.message.as_deref(),
        Some("Unavailable until 2024-03-14 11:30")
    );
}

#[tokio::test]
async fn test_closed_block_with_no_later_openings() {
    let user_id = Uuid::new_v4();
    let now = at(16, 30);

    let mut schedules = MockScheduleRepo::new();
    schedules
        .expect_get_current_for_user()
        .returning(move |uid, _| Ok(Some(schedule_row(uid, at(16, 0), at(17, 0), false))));
    schedules
        .expect_get_next_available()
        .returning(|_, _| Ok(None));

    let mut appointments = MockAppointmentRepo::new();
    appointments.expect_count_for_schedule().returning(|_| Ok(0));

    let decision = evaluate(&schedules, &appointments, user_id, now).await;
    assert_eq!(decision, Decision::NoneUpcoming);

    let response = to_response(user_id, now, decision);
    assert_eq!(
        response.message.as_deref(),
        Some("No more available schedules today")
    );
}

#[tokio::test]
async fn test_no_schedule_covering_now() {
    let user_id = Uuid::new_v4();
    let now = at(8, 0);

    let mut schedules = MockScheduleRepo::new();
    schedules
        .expect_get_current_for_user()
        .returning(|_, _| Ok(None));

    let appointments = MockAppointmentRepo::new();

    let decision = evaluate(&schedules, &appointments, user_id, now).await;
    assert_eq!(decision, Decision::NoCurrentSchedule);

    let response = to_response(user_id, now, decision);
    assert!(!response.is_available);
    assert_eq!(response.message.as_deref(), Some("No current schedules found"));
}
