use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::console_session::errors::ConsoleSessionError;
use crate::domain::console_session::model::ConsoleSession;

pub struct GetConsoleSessionParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetConsoleSessionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetConsoleSessionParams,
    ) -> Result<ConsoleSession, ConsoleSessionError>;
}
