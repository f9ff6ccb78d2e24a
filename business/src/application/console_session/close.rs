use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console_session::errors::ConsoleSessionError;
use crate::domain::console_session::repository::ConsoleSessionRepository;
use crate::domain::console_session::use_cases::close::{
    CloseConsoleSessionParams, CloseConsoleSessionUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CloseConsoleSessionUseCaseImpl {
    pub repository: Arc<dyn ConsoleSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CloseConsoleSessionUseCase for CloseConsoleSessionUseCaseImpl {
    async fn execute(&self, params: CloseConsoleSessionParams) -> Result<(), ConsoleSessionError> {
        self.logger
            .info(&format!("Closing console session: {}", params.id));

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ConsoleSessionError::NotFound,
                other => ConsoleSessionError::Repository(other),
            })?;

        self.logger
            .info(&format!("Console session closed: {}", params.id));
        Ok(())
    }
}
