pub mod m202608080001_create_users;
pub mod m202608080002_create_courses;
pub mod m202608080003_create_modules;
pub mod m202608080004_create_lessons;
pub mod m202608080005_create_enrollments;
pub mod m202608080006_create_lesson_progress;
pub mod m202608080007_create_quizzes;
pub mod m202608080008_create_quiz_questions;
pub mod m202608080009_create_quiz_attempts;
pub mod m202608080010_create_assignments;
pub mod m202608080011_create_assignment_submissions;
pub mod m202608080012_create_reviews;
