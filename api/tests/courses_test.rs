mod helpers;

use axum::http::StatusCode;
use db::models::{
    course::{Model as CourseModel, Status},
    lesson::Model as LessonModel,
    module::Model as ModuleModel,
    user::{Model as UserModel, Role},
};
use helpers::{body_json, get, instructor_token, json_request, make_test_app, student_token};
use sea_orm::DbConn;
use serde_json::json;

async fn seed_instructor(db: &DbConn, sub: &str) -> UserModel {
    UserModel::upsert(
        db,
        sub,
        &format!("{sub}@example.com"),
        "Ina",
        "Struct",
        Role::Instructor,
    )
    .await
    .unwrap()
}

async fn seed_student(db: &DbConn, sub: &str) -> UserModel {
    UserModel::upsert(
        db,
        sub,
        &format!("{sub}@example.com"),
        "Sam",
        "Learner",
        Role::Student,
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn instructor_creates_draft_course() {
    let (app, app_state) = make_test_app().await;
    seed_instructor(app_state.db(), "sub-ina").await;
    let token = instructor_token("sub-ina");

    let req = json_request(
        "POST",
        "/api/courses",
        Some(&token),
        json!({
            "title": "Rust for Web Developers",
            "description": "Ownership, borrowing, and async on the backend",
            "category": "programming",
            "level": "intermediate"
        }),
    );

    let response = helpers::send(&app, req).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Course created successfully");
    assert_eq!(json["data"]["title"], "Rust for Web Developers");
    assert_eq!(json["data"]["status"], "draft");
    assert_eq!(json["data"]["instructor_id"], "sub-ina");
}

#[tokio::test]
async fn empty_title_is_rejected() {
    let (app, app_state) = make_test_app().await;
    seed_instructor(app_state.db(), "sub-ina").await;
    let token = instructor_token("sub-ina");

    let req = json_request("POST", "/api/courses", Some(&token), json!({ "title": "" }));
    let response = helpers::send(&app, req).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn student_cannot_create_course() {
    let (app, app_state) = make_test_app().await;
    seed_student(app_state.db(), "sub-sam").await;
    let token = student_token("sub-sam");

    let req = json_request("POST", "/api/courses", Some(&token), json!({ "title": "Nope" }));
    let response = helpers::send(&app, req).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn catalog_lists_only_published_courses() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let instructor = seed_instructor(db, "sub-ina").await;

    let published = CourseModel::create(db, &instructor.id, "Published", None, None, None, None)
        .await
        .unwrap();
    CourseModel::edit(db, published.id, None, None, None, Some(Status::Published), None, None)
        .await
        .unwrap();
    CourseModel::create(db, &instructor.id, "Still a draft", None, None, None, None)
        .await
        .unwrap();

    let response = helpers::send(&app, get("/api/courses", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Published");
}

#[tokio::test]
async fn draft_course_is_visible_only_to_its_owner() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let instructor = seed_instructor(db, "sub-ina").await;
    seed_student(db, "sub-sam").await;

    let draft = CourseModel::create(db, &instructor.id, "Secret draft", None, None, None, None)
        .await
        .unwrap();
    let uri = format!("/api/courses/{}", draft.id);

    let owner_token = instructor_token("sub-ina");
    let response = helpers::send(&app, get(&uri, Some(&owner_token))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let student = student_token("sub-sam");
    let response = helpers::send(&app, get(&uri, Some(&student))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["message"], "This course is not published yet");
}

#[tokio::test]
async fn course_detail_carries_ordered_modules_and_lessons() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let instructor = seed_instructor(db, "sub-ina").await;
    seed_student(db, "sub-sam").await;

    let course = CourseModel::create(db, &instructor.id, "Rust 101", None, None, None, None)
        .await
        .unwrap();
    CourseModel::edit(db, course.id, None, None, None, Some(Status::Published), None, None)
        .await
        .unwrap();

    let m2 = ModuleModel::create(db, course.id, "Ownership", None, 1).await.unwrap();
    let m1 = ModuleModel::create(db, course.id, "Basics", None, 0).await.unwrap();
    LessonModel::create(db, m1.id, "Intro", None, None, Some(300), 0).await.unwrap();
    LessonModel::create(db, m1.id, "Syntax", None, None, Some(600), 1).await.unwrap();
    LessonModel::create(db, m2.id, "Borrowing", None, None, None, 0).await.unwrap();

    let token = student_token("sub-sam");
    let response = helpers::send(&app, get(&format!("/api/courses/{}", course.id), Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let modules = json["data"]["modules"].as_array().unwrap();
    assert_eq!(modules.len(), 2);
    // Authoring order, not insertion order.
    assert_eq!(modules[0]["title"], "Basics");
    assert_eq!(modules[0]["lessons"].as_array().unwrap().len(), 2);
    assert_eq!(modules[1]["title"], "Ownership");
}

#[tokio::test]
async fn only_the_owner_can_edit_or_delete() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let owner = seed_instructor(db, "sub-ina").await;
    seed_instructor(db, "sub-rival").await;

    let course = CourseModel::create(db, &owner.id, "Rust 101", None, None, None, None)
        .await
        .unwrap();
    let uri = format!("/api/courses/{}", course.id);

    let rival = instructor_token("sub-rival");
    let response = helpers::send(
        &app,
        json_request("PUT", &uri, Some(&rival), json!({ "title": "Hijacked" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let owner_token = instructor_token("sub-ina");
    let response = helpers::send(
        &app,
        json_request("PUT", &uri, Some(&owner_token), json!({ "status": "published" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "published");
}
