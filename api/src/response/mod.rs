use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;
use services::ServiceError;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// Every endpoint answers with the same envelope:
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Some message"
/// }
/// ```
///
/// - `T` is the type of the `data` payload.
/// - `success` is a boolean indicating operation status.
/// - `message` provides a human-readable context string.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    ///
    /// `T` must implement `Default`, since error responses carry no useful data.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

/// Empty payload for error envelopes.
#[derive(Serialize, Default)]
pub struct Empty;

/// Maps the service failure taxonomy onto HTTP statuses.
///
/// Storage failures are logged in full but reach the client as an opaque 500;
/// every other variant carries its own message.
pub fn error_response(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = match &err {
        ServiceError::Db(e) => {
            tracing::error!(error = %e, "database failure");
            "Internal server error".to_string()
        }
        other => other.to_string(),
    };

    (status, Json(ApiResponse::<Empty>::error(message))).into_response()
}

/// Rejects a request whose body failed `validator` checks.
pub fn validation_error_response(errors: validator::ValidationErrors) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::<Empty>::error(errors.to_string())),
    )
        .into_response()
}
