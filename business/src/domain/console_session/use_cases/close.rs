use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::console_session::errors::ConsoleSessionError;

pub struct CloseConsoleSessionParams {
    pub id: Uuid,
}

#[async_trait]
pub trait CloseConsoleSessionUseCase: Send + Sync {
    async fn execute(&self, params: CloseConsoleSessionParams) -> Result<(), ConsoleSessionError>;
}
