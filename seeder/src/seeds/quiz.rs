use crate::seed::Seeder;
use db::models::{
    course::Model as CourseModel,
    lesson::Model as LessonModel,
    quiz::Model as QuizModel,
    quiz_question::{Model as QuizQuestionModel, QuestionType},
};
use sea_orm::DatabaseConnection;
use serde_json::json;

pub struct QuizSeeder;

#[async_trait::async_trait]
impl Seeder for QuizSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let courses = CourseModel::get_by_instructor(db, "seed-instructor")
            .await
            .expect("courses missing");

        for course in courses {
            let lessons = LessonModel::get_by_course(db, course.id)
                .await
                .expect("lessons missing");
            let Some(first) = lessons.first() else { continue };

            let quiz = QuizModel::create(db, first.id, "Module checkpoint", 70)
                .await
                .expect("quiz insert failed");

            let _ = QuizQuestionModel::create(
                db,
                quiz.id,
                "Rust guarantees memory safety without a garbage collector.",
                QuestionType::TrueFalse,
                "true",
                None,
                0,
            )
            .await;

            let _ = QuizQuestionModel::create(
                db,
                quiz.id,
                "Which keyword introduces an immutable binding?",
                QuestionType::MultipleChoice,
                "let",
                Some(json!(["let", "mut", "static"])),
                1,
            )
            .await;

            let _ = QuizQuestionModel::create(
                db,
                quiz.id,
                "The borrow checker runs at runtime.",
                QuestionType::TrueFalse,
                "false",
                None,
                2,
            )
            .await;
        }
    }
}
