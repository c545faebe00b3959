pub mod appointment;
pub mod auth_token;
pub mod integration;
pub mod notification;
pub mod report;
pub mod schedule;
pub mod user;
