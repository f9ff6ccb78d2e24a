#[derive(Debug, thiserror::Error)]
pub enum ConsoleSessionError {
    #[error("console_session.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
