use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202608080001_create_users::Migration),
            Box::new(migrations::m202608080002_create_courses::Migration),
            Box::new(migrations::m202608080003_create_modules::Migration),
            Box::new(migrations::m202608080004_create_lessons::Migration),
            Box::new(migrations::m202608080005_create_enrollments::Migration),
            Box::new(migrations::m202608080006_create_lesson_progress::Migration),
            Box::new(migrations::m202608080007_create_quizzes::Migration),
            Box::new(migrations::m202608080008_create_quiz_questions::Migration),
            Box::new(migrations::m202608080009_create_quiz_attempts::Migration),
            Box::new(migrations::m202608080010_create_assignments::Migration),
            Box::new(migrations::m202608080011_create_assignment_submissions::Migration),
            Box::new(migrations::m202608080012_create_reviews::Migration),
        ]
    }
}
