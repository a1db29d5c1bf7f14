use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::get_student_stats;

/// `/students` route group.
pub fn student_routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_student_stats))
}
