use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;

/// Adds the item described by the form to the shopcart in the form.
#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError>;
}
