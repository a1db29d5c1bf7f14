use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::{get_enrolled_course_ids, get_enrollment_for_course, get_my_courses};
use post::create_enrollment;

pub fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_enrollment))
        .route("/my-courses", get(get_my_courses))
        .route("/course-ids", get(get_enrolled_course_ids))
        .route("/course/{course_id}", get(get_enrollment_for_course))
}
