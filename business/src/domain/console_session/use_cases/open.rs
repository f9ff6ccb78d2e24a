use async_trait::async_trait;

use crate::domain::console_session::errors::ConsoleSessionError;
use crate::domain::console_session::model::ConsoleSession;

#[async_trait]
pub trait OpenConsoleSessionUseCase: Send + Sync {
    async fn execute(&self) -> Result<ConsoleSession, ConsoleSessionError>;
}
