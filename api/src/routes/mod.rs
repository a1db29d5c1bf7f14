//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by resource, each group protected via the appropriate
//! access-control middleware. The course catalog and health probe are public;
//! everything else requires a verified bearer token, and authoring endpoints
//! additionally require instructor capability.

use axum::{Router, middleware::from_fn};
use util::state::AppState;

use crate::auth::guards::{allow_authenticated, require_instructor};

pub mod assignment_submissions;
pub mod assignments;
pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod instructor;
pub mod lesson_progress;
pub mod lessons;
pub mod modules;
pub mod quiz_attempts;
pub mod quiz_questions;
pub mod quizzes;
pub mod students;

/// Builds the complete application router for all HTTP endpoints.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/auth", auth::auth_routes())
        .nest("/courses", courses::course_routes())
        .nest(
            "/instructor",
            instructor::instructor_routes().route_layer(from_fn(require_instructor)),
        )
        .nest(
            "/students",
            students::student_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest("/modules", modules::module_routes().route_layer(from_fn(allow_authenticated)))
        .nest("/lessons", lessons::lesson_routes().route_layer(from_fn(allow_authenticated)))
        .nest(
            "/enrollments",
            enrollments::enrollment_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/lesson-progress",
            lesson_progress::lesson_progress_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest("/quizzes", quizzes::quiz_routes().route_layer(from_fn(allow_authenticated)))
        .nest(
            "/quiz-questions",
            quiz_questions::quiz_question_routes().route_layer(from_fn(require_instructor)),
        )
        .nest(
            "/quiz-attempts",
            quiz_attempts::quiz_attempt_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/assignments",
            assignments::assignment_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/assignment-submissions",
            assignment_submissions::submission_routes().route_layer(from_fn(allow_authenticated)),
        )
        .with_state(app_state)
}
