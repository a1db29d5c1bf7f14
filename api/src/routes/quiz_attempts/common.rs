use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubmitAttemptRequest {
    pub quiz_id: i64,
    /// Map of question id (stringly keyed, as JSON objects are) to the
    /// submitted answer text. May be partial.
    #[serde(default)]
    pub answers: HashMap<String, String>,
}
