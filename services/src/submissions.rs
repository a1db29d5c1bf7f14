//! Assignment submissions: one hand-in per (user, assignment), graded only by
//! the instructor who owns the course.

use db::models::{
    assignment::Model as AssignmentModel,
    assignment_submission::Model as SubmissionModel,
};
use sea_orm::DbConn;

use crate::error::ServiceError;
use crate::ownership;

pub async fn submit(
    db: &DbConn,
    user_id: &str,
    assignment_id: i64,
    content: Option<&str>,
    file_url: Option<&str>,
) -> Result<SubmissionModel, ServiceError> {
    AssignmentModel::get_by_id(db, assignment_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Assignment not found".into()))?;

    if SubmissionModel::find_by_user_and_assignment(db, user_id, assignment_id)
        .await?
        .is_some()
    {
        return Err(ServiceError::Conflict(
            "You have already submitted this assignment".into(),
        ));
    }

    Ok(SubmissionModel::create(db, user_id, assignment_id, content, file_url).await?)
}

/// Records a grade in [0, 100] with optional feedback.
pub async fn grade_submission(
    db: &DbConn,
    grader_id: &str,
    submission_id: i64,
    grade: i32,
    feedback: Option<&str>,
) -> Result<SubmissionModel, ServiceError> {
    if !(0..=100).contains(&grade) {
        return Err(ServiceError::Validation(
            "Grade must be between 0 and 100".into(),
        ));
    }

    let submission = SubmissionModel::get_by_id(db, submission_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Submission not found".into()))?;

    let course = ownership::course_of_assignment(db, submission.assignment_id).await?;
    if course.instructor_id != grader_id {
        return Err(ServiceError::Forbidden(
            "Only the course instructor may grade submissions".into(),
        ));
    }

    Ok(SubmissionModel::set_grade(db, submission_id, grade, feedback).await?)
}
