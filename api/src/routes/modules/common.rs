use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateModuleRequest {
    pub course_id: i64,
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateModuleRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub order: Option<i32>,
}
