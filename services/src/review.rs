//! Course reviews: rating bounds, enrollment gating, one review per student.

use db::models::{
    course::Model as CourseModel, enrollment::Model as EnrollmentModel,
    review::Model as ReviewModel,
};
use sea_orm::DbConn;

use crate::error::ServiceError;

pub async fn create_review(
    db: &DbConn,
    user_id: &str,
    course_id: i64,
    rating: i32,
    comment: Option<&str>,
) -> Result<ReviewModel, ServiceError> {
    if !(1..=5).contains(&rating) {
        return Err(ServiceError::Validation(
            "Rating must be between 1 and 5".into(),
        ));
    }

    CourseModel::get_by_id(db, course_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Course not found".into()))?;

    if EnrollmentModel::find_by_user_and_course(db, user_id, course_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::Forbidden(
            "Only enrolled students can review a course".into(),
        ));
    }

    if ReviewModel::find_by_user_and_course(db, user_id, course_id)
        .await?
        .is_some()
    {
        return Err(ServiceError::Conflict(
            "You have already reviewed this course".into(),
        ));
    }

    Ok(ReviewModel::create(db, user_id, course_id, rating, comment).await?)
}
