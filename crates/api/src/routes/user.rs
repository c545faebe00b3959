use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/user", post(handlers::user::create_user))
        .route("/user/:id", put(handlers::user::update_user))
        .route("/user/:id", get(handlers::user::get_user_profile))
}
