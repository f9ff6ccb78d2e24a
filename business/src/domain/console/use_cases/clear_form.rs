use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;

#[async_trait]
pub trait ClearFormUseCase: Send + Sync {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError>;
}
