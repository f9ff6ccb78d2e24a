use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::list_shopcarts::ListShopcartsUseCase;
use crate::domain::console::use_cases::update_shopcart::UpdateShopcartUseCase;
use crate::domain::logger::Logger;
use crate::domain::shopcart::gateway::ShopcartGateway;
use crate::domain::shopcart::model::ShopcartUpdate;

pub struct UpdateShopcartUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub list: Arc<dyn ListShopcartsUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateShopcartUseCase for UpdateShopcartUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        let (Some(shopcart_id), Some(customer_id)) =
            (state.form.shopcart_id(), state.form.customer_id())
        else {
            return Err(ConsoleError::Validation(
                "Both Shopcart ID and Customer ID are required to update a shopcart.",
            ));
        };
        state.flash.clear();
        self.logger.info(&format!(
            "Moving shopcart {} to customer {}",
            shopcart_id, customer_id
        ));

        let shopcart = self
            .gateway
            .update_shopcart(&shopcart_id, &ShopcartUpdate { customer_id })
            .await
            .map_err(ConsoleError::request_failed("Error updating shopcart."))?;

        state.form.shopcart_id = shopcart.id.to_string();
        state.form.customer_id = shopcart
            .customer_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        if let Err(err) = self.list.execute(state).await {
            self.logger
                .warn(&format!("Shopcart listing refresh failed: {}", err));
        }

        state.flash.show("Shopcart successfully updated!");
        Ok(())
    }
}
