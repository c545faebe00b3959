use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/schedule", post(handlers::schedule::create_schedule))
        .route("/schedule/:id", get(handlers::schedule::get_schedule))
        .route("/schedule/:id", put(handlers::schedule::update_schedule))
        .route("/schedule/:id", delete(handlers::schedule::delete_schedule))
}
