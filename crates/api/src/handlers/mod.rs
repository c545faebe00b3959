pub mod auth;
pub mod availability;
pub mod integration;
pub mod notification;
pub mod report;
pub mod schedule;
pub mod user;
