use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;

/// Creates a shopcart for the customer in the form.
#[async_trait]
pub trait CreateShopcartUseCase: Send + Sync {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError>;
}
