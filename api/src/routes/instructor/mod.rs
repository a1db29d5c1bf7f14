use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::{get_instructor_courses, get_instructor_stats};

/// `/instructor` route group; every endpoint requires instructor capability.
pub fn instructor_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(get_instructor_courses))
        .route("/stats", get(get_instructor_stats))
}
