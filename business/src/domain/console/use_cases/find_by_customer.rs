use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;

/// Lists the shopcarts owned by the customer in the form.
#[async_trait]
pub trait FindShopcartsByCustomerUseCase: Send + Sync {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError>;
}
