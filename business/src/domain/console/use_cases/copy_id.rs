use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;

/// Copies the shopcart id field into the clipboard slot.
#[async_trait]
pub trait CopyShopcartIdUseCase: Send + Sync {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError>;
}
