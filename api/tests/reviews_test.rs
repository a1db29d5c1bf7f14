mod helpers;

use axum::http::StatusCode;
use db::models::{
    course::{Model as CourseModel, Status},
    user::{Model as UserModel, Role},
};
use helpers::{body_json, get, json_request, make_test_app, student_token};
use sea_orm::DbConn;
use serde_json::json;

async fn seed_published_course(db: &DbConn) -> CourseModel {
    let instructor = UserModel::upsert(
        db,
        "sub-ina",
        "sub-ina@example.com",
        "Ina",
        "Struct",
        Role::Instructor,
    )
    .await
    .unwrap();
    let course = CourseModel::create(db, &instructor.id, "Rust 101", None, None, None, None)
        .await
        .unwrap();
    CourseModel::edit(db, course.id, None, None, None, Some(Status::Published), None, None)
        .await
        .unwrap()
}

async fn seed_student(db: &DbConn, sub: &str) {
    UserModel::upsert(
        db,
        sub,
        &format!("{sub}@example.com"),
        "Sam",
        "Learner",
        Role::Student,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn only_enrolled_students_can_review() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let course = seed_published_course(db).await;
    seed_student(db, "sub-sam").await;
    let token = student_token("sub-sam");
    let uri = format!("/api/courses/{}/reviews", course.id);

    // Not enrolled yet.
    let response = helpers::send(
        &app,
        json_request("POST", &uri, Some(&token), json!({ "rating": 5 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    helpers::send(
        &app,
        json_request("POST", "/api/enrollments", Some(&token), json!({ "course_id": course.id })),
    )
    .await;

    let response = helpers::send(
        &app,
        json_request("POST", &uri, Some(&token), json!({ "rating": 5, "comment": "Loved it" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["rating"], 5);
    assert_eq!(json["data"]["comment"], "Loved it");
}

#[tokio::test]
async fn second_review_for_the_same_course_conflicts() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let course = seed_published_course(db).await;
    seed_student(db, "sub-sam").await;
    let token = student_token("sub-sam");
    let uri = format!("/api/courses/{}/reviews", course.id);

    helpers::send(
        &app,
        json_request("POST", "/api/enrollments", Some(&token), json!({ "course_id": course.id })),
    )
    .await;
    helpers::send(&app, json_request("POST", &uri, Some(&token), json!({ "rating": 4 }))).await;

    let response = helpers::send(
        &app,
        json_request("POST", &uri, Some(&token), json!({ "rating": 2 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn rating_must_be_one_through_five() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let course = seed_published_course(db).await;
    seed_student(db, "sub-sam").await;
    let token = student_token("sub-sam");
    let uri = format!("/api/courses/{}/reviews", course.id);

    helpers::send(
        &app,
        json_request("POST", "/api/enrollments", Some(&token), json!({ "course_id": course.id })),
    )
    .await;

    for rating in [0, 6] {
        let response = helpers::send(
            &app,
            json_request("POST", &uri, Some(&token), json!({ "rating": rating })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn reviews_are_listed_newest_first() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let course = seed_published_course(db).await;
    seed_student(db, "sub-sam").await;
    seed_student(db, "sub-tess").await;

    for (sub, rating) in [("sub-sam", 5), ("sub-tess", 3)] {
        let token = student_token(sub);
        helpers::send(
            &app,
            json_request("POST", "/api/enrollments", Some(&token), json!({ "course_id": course.id })),
        )
        .await;
        helpers::send(
            &app,
            json_request(
                "POST",
                &format!("/api/courses/{}/reviews", course.id),
                Some(&token),
                json!({ "rating": rating }),
            ),
        )
        .await;
    }

    let token = student_token("sub-sam");
    let response = helpers::send(
        &app,
        get(&format!("/api/courses/{}/reviews", course.id), Some(&token)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}
