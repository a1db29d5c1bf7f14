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

struct Scenario {
    course: CourseModel,
    module: ModuleModel,
    lessons: Vec<LessonModel>,
}

async fn seed_course_with_lessons(db: &DbConn, lesson_count: usize) -> Scenario {
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
    UserModel::upsert(db, "sub-sam", "sub-sam@example.com", "Sam", "Learner", Role::Student)
        .await
        .unwrap();

    let course = CourseModel::create(db, &instructor.id, "Rust 101", None, None, None, None)
        .await
        .unwrap();
    let course =
        CourseModel::edit(db, course.id, None, None, None, Some(Status::Published), None, None)
            .await
            .unwrap();
    let module = ModuleModel::create(db, course.id, "Basics", None, 0).await.unwrap();

    let mut lessons = Vec::new();
    for i in 0..lesson_count {
        lessons.push(
            LessonModel::create(db, module.id, &format!("Lesson {}", i + 1), None, None, Some(600), i as i32)
                .await
                .unwrap(),
        );
    }

    Scenario { course, module, lessons }
}

async fn enrollment_percentage(app: &axum::Router, course_id: i64, token: &str) -> i64 {
    let response = helpers::send(app, get(&format!("/api/enrollments/course/{course_id}"), Some(token))).await;
    let json = body_json(response).await;
    json["data"]["progress_percentage"].as_i64().unwrap()
}

#[tokio::test]
async fn completing_lessons_moves_the_cached_percentage() {
    let (app, app_state) = make_test_app().await;
    let scenario = seed_course_with_lessons(app_state.db(), 4).await;
    let token = student_token("sub-sam");

    helpers::send(
        &app,
        json_request("POST", "/api/enrollments", Some(&token), json!({ "course_id": scenario.course.id })),
    )
    .await;

    // Lessons 1 and 3 of 4: 50 percent.
    for lesson in [&scenario.lessons[0], &scenario.lessons[2]] {
        let response = helpers::send(
            &app,
            json_request("POST", "/api/lesson-progress", Some(&token), json!({ "lesson_id": lesson.id })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(enrollment_percentage(&app, scenario.course.id, &token).await, 50);

    // Lesson 2 as well: 75 percent.
    helpers::send(
        &app,
        json_request(
            "POST",
            "/api/lesson-progress",
            Some(&token),
            json!({ "lesson_id": scenario.lessons[1].id }),
        ),
    )
    .await;
    assert_eq!(enrollment_percentage(&app, scenario.course.id, &token).await, 75);
}

#[tokio::test]
async fn recalculation_repairs_percentages_after_authoring_changes() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let scenario = seed_course_with_lessons(db, 4).await;
    let token = student_token("sub-sam");

    helpers::send(
        &app,
        json_request("POST", "/api/enrollments", Some(&token), json!({ "course_id": scenario.course.id })),
    )
    .await;

    for lesson in &scenario.lessons[..3] {
        helpers::send(
            &app,
            json_request("POST", "/api/lesson-progress", Some(&token), json!({ "lesson_id": lesson.id })),
        )
        .await;
    }
    assert_eq!(enrollment_percentage(&app, scenario.course.id, &token).await, 75);

    // A fifth lesson appears; the cache is stale until the owner repairs it.
    LessonModel::create(db, scenario.module.id, "Lesson 5", None, None, None, 4)
        .await
        .unwrap();
    assert_eq!(enrollment_percentage(&app, scenario.course.id, &token).await, 75);

    let owner = instructor_token("sub-ina");
    let response = helpers::send(
        &app,
        json_request(
            "POST",
            &format!("/api/courses/{}/recalculate-progress", scenario.course.id),
            Some(&owner),
            json!({}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(enrollment_percentage(&app, scenario.course.id, &token).await, 60);
}

#[tokio::test]
async fn recalculation_is_owner_only() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let scenario = seed_course_with_lessons(db, 1).await;
    UserModel::upsert(db, "sub-rival", "sub-rival@example.com", "Riv", "Al", Role::Instructor)
        .await
        .unwrap();

    let rival = instructor_token("sub-rival");
    let response = helpers::send(
        &app,
        json_request(
            "POST",
            &format!("/api/courses/{}/recalculate-progress", scenario.course.id),
            Some(&rival),
            json!({}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn course_progress_lists_completed_lesson_ids() {
    let (app, app_state) = make_test_app().await;
    let scenario = seed_course_with_lessons(app_state.db(), 3).await;
    let token = student_token("sub-sam");

    helpers::send(
        &app,
        json_request("POST", "/api/enrollments", Some(&token), json!({ "course_id": scenario.course.id })),
    )
    .await;
    for lesson in &scenario.lessons[..2] {
        helpers::send(
            &app,
            json_request("POST", "/api/lesson-progress", Some(&token), json!({ "lesson_id": lesson.id })),
        )
        .await;
    }

    let response = helpers::send(
        &app,
        get(&format!("/api/lesson-progress/course/{}", scenario.course.id), Some(&token)),
    )
    .await;
    let json = body_json(response).await;
    let ids = json["data"].as_array().unwrap();
    assert_eq!(ids.len(), 2);
}

#[tokio::test]
async fn completing_an_unknown_lesson_is_not_found() {
    let (app, app_state) = make_test_app().await;
    seed_course_with_lessons(app_state.db(), 1).await;
    let token = student_token("sub-sam");

    let response = helpers::send(
        &app,
        json_request("POST", "/api/lesson-progress", Some(&token), json!({ "lesson_id": 9999 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
