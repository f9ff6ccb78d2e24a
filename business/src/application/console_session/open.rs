use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console_session::errors::ConsoleSessionError;
use crate::domain::console_session::model::ConsoleSession;
use crate::domain::console_session::repository::ConsoleSessionRepository;
use crate::domain::console_session::use_cases::open::OpenConsoleSessionUseCase;
use crate::domain::logger::Logger;

pub struct OpenConsoleSessionUseCaseImpl {
    pub repository: Arc<dyn ConsoleSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl OpenConsoleSessionUseCase for OpenConsoleSessionUseCaseImpl {
    async fn execute(&self) -> Result<ConsoleSession, ConsoleSessionError> {
        let session = ConsoleSession::new();
        self.repository.save(&session).await?;

        self.logger
            .info(&format!("Console session opened: {}", session.id));
        Ok(session)
    }
}
