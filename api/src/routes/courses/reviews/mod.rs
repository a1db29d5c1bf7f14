use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::get_reviews;
use post::create_review;

/// `/courses/{course_id}/reviews` route group.
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_reviews))
        .route("/", post(create_review))
}
