use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::create_shopcart::CreateShopcartUseCase;
use crate::domain::console::use_cases::list_shopcarts::ListShopcartsUseCase;
use crate::domain::logger::Logger;
use crate::domain::shopcart::gateway::ShopcartGateway;
use crate::domain::shopcart::model::NewShopcart;

pub struct CreateShopcartUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub list: Arc<dyn ListShopcartsUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateShopcartUseCase for CreateShopcartUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        let customer_id = state.form.customer_id().ok_or(ConsoleError::Validation(
            "Customer ID is required to create a shopcart.",
        ))?;
        state.flash.clear();

        let new_shopcart = NewShopcart {
            id: state.form.shopcart_id(),
            customer_id,
        };
        self.logger.info(&format!(
            "Creating shopcart for customer: {}",
            new_shopcart.customer_id
        ));

        let shopcart = self
            .gateway
            .create_shopcart(&new_shopcart)
            .await
            .map_err(ConsoleError::request_failed("Error creating shopcart."))?;

        state.clipboard.copy(shopcart.id.to_string());
        self.logger.info(&format!(
            "Shopcart created: {}, id copied to clipboard",
            shopcart.id
        ));

        state.form.shopcart_id = shopcart.id.to_string();
        state.form.customer_id = shopcart
            .customer_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        state.form.clear_item();

        if let Err(err) = self.list.execute(state).await {
            self.logger
                .warn(&format!("Shopcart listing refresh failed: {}", err));
        }

        state
            .flash
            .show("Success - New shopcart created. ID copied to clipboard");
        Ok(())
    }
}
