use crate::domain::errors::GatewayError;

/// Failures of a console action. The controller turns every one of them
/// into flash text; none escapes to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConsoleError {
    /// A required field was blank; no request was sent.
    #[error("console.validation")]
    Validation(&'static str),
    /// The request failed. `fallback` is shown when the server gave no message.
    #[error("console.request_failed")]
    RequestFailed {
        fallback: &'static str,
        #[source]
        source: GatewayError,
    },
    /// The request failed and the failure body is deliberately ignored.
    #[error("console.server_error")]
    ServerError(#[source] GatewayError),
    /// The response did not have the expected shape.
    #[error("console.unexpected_format")]
    UnexpectedFormat(&'static str),
}

impl ConsoleError {
    pub fn request_failed(fallback: &'static str) -> impl FnOnce(GatewayError) -> Self {
        move |source| ConsoleError::RequestFailed { fallback, source }
    }

    /// Text for the flash area.
    pub fn flash_message(&self) -> String {
        match self {
            ConsoleError::Validation(message) | ConsoleError::UnexpectedFormat(message) => {
                (*message).to_string()
            }
            ConsoleError::RequestFailed { fallback, source } => source
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| (*fallback).to_string()),
            ConsoleError::ServerError(_) => "Server error!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefer_server_message() {
        let error = ConsoleError::request_failed("Error adding item.")(GatewayError::rejected(
            400,
            Some("Invalid Item: missing name".to_string()),
        ));

        assert_eq!(error.flash_message(), "Invalid Item: missing name");
    }

    #[test]
    fn should_fall_back_when_server_gave_no_message() {
        let error = ConsoleError::request_failed("Error adding item.")(GatewayError::unavailable());

        assert_eq!(error.flash_message(), "Error adding item.");
    }

    #[test]
    fn should_ignore_server_message_for_server_error() {
        let error = ConsoleError::ServerError(GatewayError::rejected(
            404,
            Some("Shopcart not found".to_string()),
        ));

        assert_eq!(error.flash_message(), "Server error!");
    }

    #[test]
    fn should_show_validation_text_verbatim() {
        let error = ConsoleError::Validation("Please enter a Shopcart ID to search.");

        assert_eq!(error.flash_message(), "Please enter a Shopcart ID to search.");
    }
}
