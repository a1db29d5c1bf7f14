use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::get_my_attempts;
use post::submit_quiz_attempt;

pub fn quiz_attempt_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_quiz_attempt))
        .route("/quiz/{quiz_id}", get(get_my_attempts))
}
