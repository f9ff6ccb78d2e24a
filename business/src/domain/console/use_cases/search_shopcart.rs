use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;

/// Looks up the shopcart in the form and renders its items.
///
/// Also used as the refresh step of the item actions.
#[async_trait]
pub trait SearchShopcartUseCase: Send + Sync {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError>;
}
