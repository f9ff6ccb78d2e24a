use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::delete_shopcart::DeleteShopcartUseCase;
use crate::domain::logger::Logger;
use crate::domain::shopcart::gateway::ShopcartGateway;

pub struct DeleteShopcartUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShopcartUseCase for DeleteShopcartUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        let shopcart_id = state.form.shopcart_id().ok_or(ConsoleError::Validation(
            "Shopcart ID is required to delete a shopcart.",
        ))?;
        state.flash.clear();
        self.logger
            .info(&format!("Deleting shopcart: {}", shopcart_id));

        // Failure bodies are not parsed here.
        self.gateway
            .delete_shopcart(&shopcart_id)
            .await
            .map_err(ConsoleError::ServerError)?;

        state.clear();
        state.flash.show("Shopcart has been Deleted!");

        self.logger
            .info(&format!("Shopcart deleted: {}", shopcart_id));
        Ok(())
    }
}
