//! Resolution of the Course -> Module -> Lesson ownership chain.
//!
//! Authoring endpoints repeatedly need "the course this lesson/quiz/assignment
//! ultimately belongs to" to decide whether the acting instructor owns it.

use db::models::{
    assignment::Model as AssignmentModel, course::Model as CourseModel,
    lesson::Model as LessonModel, module::Model as ModuleModel, quiz::Model as QuizModel,
};
use sea_orm::DbConn;

use crate::error::ServiceError;

pub async fn course_of_module(db: &DbConn, module_id: i64) -> Result<CourseModel, ServiceError> {
    let module = ModuleModel::get_by_id(db, module_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Module not found".into()))?;

    CourseModel::get_by_id(db, module.course_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Course not found".into()))
}

pub async fn course_of_lesson(db: &DbConn, lesson_id: i64) -> Result<CourseModel, ServiceError> {
    let lesson = LessonModel::get_by_id(db, lesson_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Lesson not found".into()))?;

    course_of_module(db, lesson.module_id).await
}

pub async fn course_of_quiz(db: &DbConn, quiz_id: i64) -> Result<CourseModel, ServiceError> {
    let quiz = QuizModel::get_by_id(db, quiz_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Quiz not found".into()))?;

    course_of_lesson(db, quiz.lesson_id).await
}

pub async fn course_of_assignment(
    db: &DbConn,
    assignment_id: i64,
) -> Result<CourseModel, ServiceError> {
    let assignment = AssignmentModel::get_by_id(db, assignment_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Assignment not found".into()))?;

    course_of_lesson(db, assignment.lesson_id).await
}

/// Rejects with `Forbidden` unless `user_id` owns the course.
pub fn ensure_owner(course: &CourseModel, user_id: &str) -> Result<(), ServiceError> {
    if course.instructor_id != user_id {
        return Err(ServiceError::Forbidden(
            "You do not own this course".into(),
        ));
    }
    Ok(())
}
