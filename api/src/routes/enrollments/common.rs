use db::models::{course::Model as CourseModel, enrollment::Model as EnrollmentModel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateEnrollmentRequest {
    pub course_id: i64,
}

/// Dashboard row: an enrollment joined with its course.
#[derive(Debug, Serialize)]
pub struct EnrollmentWithCourse {
    #[serde(flatten)]
    pub enrollment: EnrollmentModel,
    pub course: Option<CourseModel>,
}
