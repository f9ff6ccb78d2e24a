use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console_session::errors::ConsoleSessionError;
use crate::domain::console_session::model::ConsoleSession;
use crate::domain::console_session::repository::ConsoleSessionRepository;
use crate::domain::console_session::use_cases::get_by_id::{
    GetConsoleSessionParams, GetConsoleSessionUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetConsoleSessionUseCaseImpl {
    pub repository: Arc<dyn ConsoleSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetConsoleSessionUseCase for GetConsoleSessionUseCaseImpl {
    async fn execute(
        &self,
        params: GetConsoleSessionParams,
    ) -> Result<ConsoleSession, ConsoleSessionError> {
        self.logger
            .debug(&format!("Fetching console session: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ConsoleSessionError::NotFound,
                other => ConsoleSessionError::Repository(other),
            })
    }
}
