use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RecordCompletionRequest {
    pub lesson_id: i64,
}
