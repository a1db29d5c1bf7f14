use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSubmissionRequest {
    pub assignment_id: i64,
    pub content: Option<String>,
    /// Opaque reference produced by the upload pipeline.
    pub file_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GradeSubmissionRequest {
    pub grade: i32,
    pub feedback: Option<String>,
}
