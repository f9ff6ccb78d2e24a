use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::console_session::errors::ConsoleSessionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ConsoleSessionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ConsoleSessionError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "console_session.not_found",
            ),
            ConsoleSessionError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
