//! Enrollment creation with the at-most-one-per-(user, course) invariant.

use db::models::{
    course::{Model as CourseModel, Status},
    enrollment::Model as EnrollmentModel,
};
use sea_orm::DbConn;

use crate::error::ServiceError;

/// Enrolls a user in a published course.
///
/// Draft courses are invisible to anyone but their owner, so enrolling into
/// one reads as not-found rather than forbidden. Archived courses stay
/// readable but refuse new enrollments.
pub async fn enroll(
    db: &DbConn,
    user_id: &str,
    course_id: i64,
) -> Result<EnrollmentModel, ServiceError> {
    let course = CourseModel::get_by_id(db, course_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Course not found".into()))?;

    match course.status {
        Status::Published => {}
        Status::Draft => {
            return Err(ServiceError::NotFound("Course not found".into()));
        }
        Status::Archived => {
            return Err(ServiceError::Validation(
                "Course is archived and no longer accepts enrollments".into(),
            ));
        }
    }

    if EnrollmentModel::find_by_user_and_course(db, user_id, course_id)
        .await?
        .is_some()
    {
        return Err(ServiceError::Conflict(
            "Already enrolled in this course".into(),
        ));
    }

    Ok(EnrollmentModel::create(db, user_id, course_id).await?)
}
