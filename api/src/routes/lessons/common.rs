use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLessonRequest {
    pub module_id: i64,
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    /// Seconds of runtime, when known.
    pub duration: Option<i32>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLessonRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct SetVideoRequest {
    pub video_url: String,
}
