use db::models::{
    course::{Model as CourseModel, Status},
    lesson::Model as LessonModel,
    module::Model as ModuleModel,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub status: Option<Status>,
    pub category: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ModuleWithLessons {
    #[serde(flatten)]
    pub module: ModuleModel,
    pub lessons: Vec<LessonModel>,
}

/// Course detail payload: the course plus its ordered modules, each carrying
/// its ordered lessons.
#[derive(Debug, Serialize)]
pub struct CourseWithContent {
    #[serde(flatten)]
    pub course: CourseModel,
    pub modules: Vec<ModuleWithLessons>,
}
