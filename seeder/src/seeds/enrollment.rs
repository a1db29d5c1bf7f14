use crate::seed::Seeder;
use db::models::{
    course::{Model as CourseModel, Status},
    lesson::Model as LessonModel,
};
use sea_orm::DatabaseConnection;
use services::{enrollment, progress, review};

pub struct EnrollmentSeeder;

#[async_trait::async_trait]
impl Seeder for EnrollmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let courses = CourseModel::get_by_instructor(db, "seed-instructor")
            .await
            .expect("courses missing");

        for course in courses.iter().filter(|c| c.status == Status::Published) {
            if enrollment::enroll(db, "seed-student", course.id).await.is_err() {
                continue;
            }

            // Complete roughly half the course so dashboards show real numbers.
            let lessons = LessonModel::get_by_course(db, course.id)
                .await
                .expect("lessons missing");
            for lesson in lessons.iter().take(lessons.len() / 2) {
                let _ = progress::record_lesson_completion(db, "seed-student", lesson.id).await;
            }

            let _ = review::create_review(
                db,
                "seed-student",
                course.id,
                4 + fastrand::i32(0..2),
                Some("Clear explanations and useful exercises."),
            )
            .await;
        }
    }
}
