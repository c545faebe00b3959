use axum::{
    routing::{post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/notification/send",
            post(handlers::notification::send_notification),
        )
        .route(
            "/notification/preferences/update",
            put(handlers::notification::update_preferences),
        )
}
