use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/availability/update",
            post(handlers::availability::update_availability),
        )
        .route(
            "/availability/:user_id",
            get(handlers::availability::get_availability),
        )
}
