use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::retrieve_item::RetrieveItemUseCase;
use crate::domain::logger::Logger;
use crate::domain::shopcart::gateway::ShopcartGateway;

pub struct RetrieveItemUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RetrieveItemUseCase for RetrieveItemUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        let (Some(shopcart_id), Some(item_id)) = (state.form.shopcart_id(), state.form.item_id())
        else {
            return Err(ConsoleError::Validation(
                "Both Shopcart ID and Item ID are required to retrieve an item.",
            ));
        };
        state.flash.clear();
        self.logger.info(&format!(
            "Retrieving item {} of shopcart {}",
            item_id, shopcart_id
        ));

        let item = self
            .gateway
            .get_item(&shopcart_id, &item_id)
            .await
            .map_err(ConsoleError::request_failed("Error retrieving item."))?;

        state.form.fill_item(&item);
        state.flash.show("Success");
        Ok(())
    }
}
