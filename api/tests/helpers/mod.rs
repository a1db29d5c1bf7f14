use api::auth::generate_jwt;
use api::routes::routes;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use serde_json::Value;
use tower::ServiceExt;
use util::state::AppState;

/// Builds the full router over a fresh in-memory database.
pub async fn make_test_app() -> (Router, AppState) {
    let db = db::test_utils::setup_test_db().await;
    let app_state = AppState::new(db);
    let app = Router::new().nest("/api", routes(app_state.clone()));
    (app, app_state)
}

/// Token for a student subject with the standard provider claim shape.
pub fn student_token(sub: &str) -> String {
    let (token, _) = generate_jwt(
        sub,
        &format!("{sub}@example.com"),
        "Sam",
        "Learner",
        &["student"],
    );
    token
}

/// Token whose role list grants instructor capability.
pub fn instructor_token(sub: &str) -> String {
    let (token, _) = generate_jwt(
        sub,
        &format!("{sub}@example.com"),
        "Ina",
        "Struct",
        &["instructor"],
    );
    token
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<axum::body::Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_json(response: Response<axum::body::Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
