use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAppointment, DbAuthToken, DbProfile, DbSchedule, DbUser};

// Mock repositories for testing
mock! {
    pub ScheduleRepo {
        pub async fn create_schedule(
            &self,
            user_id: Uuid,
            start_time: DateTime<Utc>,
            end_time: DateTime<Utc>,
            title: &'static str,
            description: Option<&'static str>,
            available: bool,
        ) -> eyre::Result<DbSchedule>;

        pub async fn get_schedule_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbSchedule>>;

        pub async fn get_current_for_user(
            &self,
            user_id: Uuid,
            now: DateTime<Utc>,
        ) -> eyre::Result<Option<DbSchedule>>;

        pub async fn get_next_available(
            &self,
            user_id: Uuid,
            after: DateTime<Utc>,
        ) -> eyre::Result<Option<DbSchedule>>;

        pub async fn delete_schedule(
            &self,
            id: Uuid,
        ) -> eyre::Result<u64>;

        pub async fn set_availability_for_upcoming(
            &self,
            user_id: Uuid,
            now: DateTime<Utc>,
            available: bool,
        ) -> eyre::Result<u64>;
    }
}

mock! {
    pub AppointmentRepo {
        pub async fn get_appointments_by_schedule_id(
            &self,
            schedule_id: Uuid,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn count_for_schedule(
            &self,
            schedule_id: Uuid,
        ) -> eyre::Result<i64>;
    }
}

mock! {
    pub UserRepo {
        pub async fn get_user_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn get_user_by_email(
            &self,
            email: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn update_user(
            &self,
            id: Uuid,
            email: Option<&'static str>,
            role: Option<&'static str>,
        ) -> eyre::Result<DbUser>;

        pub async fn get_profile_by_user_id(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Option<DbProfile>>;

        pub async fn update_profile(
            &self,
            user_id: Uuid,
            first_name: Option<&'static str>,
            last_name: Option<&'static str>,
        ) -> eyre::Result<DbProfile>;
    }
}

mock! {
    pub AuthTokenRepo {
        pub async fn get_by_token(
            &self,
            token: &'static str,
        ) -> eyre::Result<Option<DbAuthToken>>;

        pub async fn rotate(
            &self,
            old_token: &'static str,
            new_token: &'static str,
            new_expiry: DateTime<Utc>,
        ) -> eyre::Result<Option<DbAuthToken>>;

        pub async fn delete_by_token(
            &self,
            token: &'static str,
        ) -> eyre::Result<u64>;
    }
}
