use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    pub lesson_id: i64,
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,
    #[validate(range(min = 0, max = 100, message = "pass_percentage must be 0-100"))]
    #[serde(default = "default_pass_percentage")]
    pub pass_percentage: i32,
}

fn default_pass_percentage() -> i32 {
    70
}
