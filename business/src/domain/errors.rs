/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
}

/// Errors raised by the remote shopcart API gateway.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// The server answered with a non-success status.
    /// `message` holds the body's `message` field when one was present.
    #[error("gateway.rejected")]
    Rejected { status: u16, message: Option<String> },
    #[error("gateway.unavailable")]
    Unavailable,
    #[error("gateway.unexpected_response")]
    UnexpectedResponse,
}

impl GatewayError {
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        GatewayError::Rejected { status, message }
    }
    pub fn unavailable() -> Self {
        GatewayError::Unavailable
    }
    pub fn unexpected_response() -> Self {
        GatewayError::UnexpectedResponse
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}
