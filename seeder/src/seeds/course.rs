use crate::seed::Seeder;
use db::models::{
    course::{Model as CourseModel, Status},
    lesson::Model as LessonModel,
    module::Model as ModuleModel,
};
use sea_orm::DatabaseConnection;

pub struct CourseSeeder;

const COURSES: &[(&str, &str, &str)] = &[
    ("Rust Fundamentals", "programming", "beginner"),
    ("Async Rust in Production", "programming", "advanced"),
    ("Web Backends with Axum", "web", "intermediate"),
];

#[async_trait::async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        for (title, category, level) in COURSES {
            let course = CourseModel::create(
                db,
                "seed-instructor",
                title,
                Some("Hands-on video course with quizzes and exercises"),
                None,
                Some(category),
                Some(level),
            )
            .await
            .expect("course insert failed");

            // First two courses go live; the third stays a draft.
            if !title.starts_with("Web") {
                CourseModel::edit(db, course.id, None, None, None, Some(Status::Published), None, None)
                    .await
                    .expect("course publish failed");
            }

            for (m_idx, module_title) in ["Getting Started", "Going Deeper"].iter().enumerate() {
                let module =
                    ModuleModel::create(db, course.id, module_title, None, m_idx as i32)
                        .await
                        .expect("module insert failed");

                for l_idx in 0..3 {
                    let minutes = 5 + fastrand::i32(0..20);
                    let _ = LessonModel::create(
                        db,
                        module.id,
                        &format!("{} - Lesson {}", module_title, l_idx + 1),
                        None,
                        Some(&format!("/videos/{}-{}-{}.mp4", course.id, m_idx, l_idx)),
                        Some(minutes * 60),
                        l_idx,
                    )
                    .await
                    .expect("lesson insert failed");
                }
            }
        }
    }
}
