use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;

/// Removes every item from the shopcart in the form.
#[async_trait]
pub trait ClearItemsUseCase: Send + Sync {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError>;
}
