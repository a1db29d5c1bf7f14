mod helpers;

use axum::http::StatusCode;
use db::models::{
    course::Model as CourseModel,
    lesson::Model as LessonModel,
    module::Model as ModuleModel,
    user::{Model as UserModel, Role},
};
use helpers::{body_json, get, instructor_token, json_request, make_test_app, student_token};
use sea_orm::DbConn;
use serde_json::json;

async fn seed_lesson(db: &DbConn) -> LessonModel {
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
    let module = ModuleModel::create(db, course.id, "Basics", None, 0).await.unwrap();
    LessonModel::create(db, module.id, "Intro", None, None, None, 0)
        .await
        .unwrap()
}

async fn create_quiz(app: &axum::Router, lesson_id: i64, token: &str, pass_percentage: i32) -> i64 {
    let response = helpers::send(
        app,
        json_request(
            "POST",
            "/api/quizzes",
            Some(token),
            json!({ "lesson_id": lesson_id, "title": "Checkpoint", "pass_percentage": pass_percentage }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn add_question(app: &axum::Router, token: &str, body: serde_json::Value) -> i64 {
    let response = helpers::send(app, json_request("POST", "/api/quiz-questions", Some(token), body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn quiz_authoring_validates_questions() {
    let (app, app_state) = make_test_app().await;
    let lesson = seed_lesson(app_state.db()).await;
    let token = instructor_token("sub-ina");
    let quiz_id = create_quiz(&app, lesson.id, &token, 70).await;

    // Correct answer missing from the options.
    let response = helpers::send(
        &app,
        json_request(
            "POST",
            "/api/quiz-questions",
            Some(&token),
            json!({
                "quiz_id": quiz_id,
                "question": "Which keyword?",
                "type": "multiple_choice",
                "correct_answer": "var",
                "options": ["let", "mut"]
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // A single option is not a choice.
    let response = helpers::send(
        &app,
        json_request(
            "POST",
            "/api/quiz-questions",
            Some(&token),
            json!({
                "quiz_id": quiz_id,
                "question": "Which keyword?",
                "type": "multiple_choice",
                "correct_answer": "let",
                "options": ["let"]
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // True/false answers live in a two-value domain.
    let response = helpers::send(
        &app,
        json_request(
            "POST",
            "/api/quiz-questions",
            Some(&token),
            json!({
                "quiz_id": quiz_id,
                "question": "Is Rust memory safe?",
                "type": "true_false",
                "correct_answer": "yes"
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn scoring_rounds_and_compares_against_the_threshold() {
    let (app, app_state) = make_test_app().await;
    let lesson = seed_lesson(app_state.db()).await;
    let owner = instructor_token("sub-ina");
    let quiz_id = create_quiz(&app, lesson.id, &owner, 70).await;

    let q1 = add_question(
        &app,
        &owner,
        json!({
            "quiz_id": quiz_id,
            "question": "Is Rust memory safe?",
            "type": "true_false",
            "correct_answer": "true",
            "order": 0
        }),
    )
    .await;
    let q2 = add_question(
        &app,
        &owner,
        json!({
            "quiz_id": quiz_id,
            "question": "Immutable binding keyword?",
            "type": "multiple_choice",
            "correct_answer": "let",
            "options": ["let", "mut", "var"],
            "order": 1
        }),
    )
    .await;
    let q3 = add_question(
        &app,
        &owner,
        json!({
            "quiz_id": quiz_id,
            "question": "Does Rust have a GC?",
            "type": "true_false",
            "correct_answer": "false",
            "order": 2
        }),
    )
    .await;

    let student = student_token("sub-sam");

    // Two of three: 67, below the 70 threshold.
    let response = helpers::send(
        &app,
        json_request(
            "POST",
            "/api/quiz-attempts",
            Some(&student),
            json!({
                "quiz_id": quiz_id,
                "answers": {
                    (q1.to_string()): "true",
                    (q2.to_string()): "let",
                    (q3.to_string()): "true"
                }
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["score"], 67);
    assert_eq!(json["data"]["passed"], false);

    // All three: 100, passed.
    let response = helpers::send(
        &app,
        json_request(
            "POST",
            "/api/quiz-attempts",
            Some(&student),
            json!({
                "quiz_id": quiz_id,
                "answers": {
                    (q1.to_string()): "true",
                    (q2.to_string()): "let",
                    (q3.to_string()): "false"
                }
            }),
        ),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["score"], 100);
    assert_eq!(json["data"]["passed"], true);

    // Both attempts survive as history.
    let response = helpers::send(
        &app,
        get(&format!("/api/quiz-attempts/quiz/{quiz_id}"), Some(&student)),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn empty_quiz_cannot_be_attempted() {
    let (app, app_state) = make_test_app().await;
    let lesson = seed_lesson(app_state.db()).await;
    let owner = instructor_token("sub-ina");
    let quiz_id = create_quiz(&app, lesson.id, &owner, 70).await;

    let student = student_token("sub-sam");
    let response = helpers::send(
        &app,
        json_request(
            "POST",
            "/api/quiz-attempts",
            Some(&student),
            json!({ "quiz_id": quiz_id, "answers": {} }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_owner_cannot_author_quizzes() {
    let (app, app_state) = make_test_app().await;
    let db = app_state.db();
    let lesson = seed_lesson(db).await;
    UserModel::upsert(db, "sub-rival", "sub-rival@example.com", "Riv", "Al", Role::Instructor)
        .await
        .unwrap();

    let rival = instructor_token("sub-rival");
    let response = helpers::send(
        &app,
        json_request(
            "POST",
            "/api/quizzes",
            Some(&rival),
            json!({ "lesson_id": lesson.id, "title": "Checkpoint" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn question_bank_is_served_in_order() {
    let (app, app_state) = make_test_app().await;
    let lesson = seed_lesson(app_state.db()).await;
    let owner = instructor_token("sub-ina");
    let quiz_id = create_quiz(&app, lesson.id, &owner, 70).await;

    add_question(
        &app,
        &owner,
        json!({
            "quiz_id": quiz_id,
            "question": "Second",
            "type": "true_false",
            "correct_answer": "true",
            "order": 1
        }),
    )
    .await;
    add_question(
        &app,
        &owner,
        json!({
            "quiz_id": quiz_id,
            "question": "First",
            "type": "true_false",
            "correct_answer": "false",
            "order": 0
        }),
    )
    .await;

    let student = student_token("sub-sam");
    let response = helpers::send(
        &app,
        get(&format!("/api/quizzes/{quiz_id}/questions"), Some(&student)),
    )
    .await;
    let json = body_json(response).await;
    let questions = json["data"].as_array().unwrap();
    assert_eq!(questions[0]["question"], "First");
    assert_eq!(questions[1]["question"], "Second");
}
