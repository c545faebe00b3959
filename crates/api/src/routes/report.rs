use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/report/generate", post(handlers::report::generate_report))
        .route("/report/:id", get(handlers::report::get_report))
}
