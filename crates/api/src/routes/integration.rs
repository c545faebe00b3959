use axum::{
    routing::{delete, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/integration/add",
            post(handlers::integration::add_integration),
        )
        .route(
            "/integration/:id/update",
            put(handlers::integration::update_integration),
        )
        .route(
            "/integration/:id/remove",
            delete(handlers::integration::remove_integration),
        )
}
