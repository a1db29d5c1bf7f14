mod helpers;

use axum::http::StatusCode;
use db::models::user::Model as UserModel;
use helpers::{body_json, get, instructor_token, make_test_app, student_token};

#[tokio::test]
async fn current_user_synchronizes_local_record() {
    let (app, app_state) = make_test_app().await;
    let token = instructor_token("sub-ina");

    let response = helpers::send(&app, get("/api/auth/user", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["id"], "sub-ina");
    assert_eq!(json["data"]["email"], "sub-ina@example.com");
    assert_eq!(json["data"]["role"], "instructor");

    let stored = UserModel::get_by_id(app_state.db(), "sub-ina").await.unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn repeated_login_updates_instead_of_duplicating() {
    let (app, app_state) = make_test_app().await;
    let token = student_token("sub-sam");

    helpers::send(&app, get("/api/auth/user", Some(&token))).await;
    let response = helpers::send(&app, get("/api/auth/user", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = UserModel::get_by_id(app_state.db(), "sub-sam")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.email, "sub-sam@example.com");
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let (app, _app_state) = make_test_app().await;

    let response = helpers::send(&app, get("/api/students/stats", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let (app, _app_state) = make_test_app().await;

    let response = helpers::send(&app, get("/api/students/stats", Some("not-a-jwt"))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn student_cannot_reach_instructor_routes() {
    let (app, _app_state) = make_test_app().await;
    let token = student_token("sub-sam");

    let response = helpers::send(&app, get("/api/instructor/stats", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Instructor access required");
}

#[tokio::test]
async fn health_check_is_public() {
    let (app, _app_state) = make_test_app().await;

    let response = helpers::send(&app, get("/api/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"], "OK");
}
