//! # Availo Core
//!
//! Domain types and decision logic for the Availo availability-tracking
//! service. This crate carries the error taxonomy, the request/response
//! models shared between the API surface and the persistence layer, and the
//! availability engine that determines whether a professional is currently
//! free to take work.

pub mod availability;
pub mod errors;
pub mod models;
