use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::delete_item::DeleteItemUseCase;
use crate::domain::console::use_cases::search_shopcart::SearchShopcartUseCase;
use crate::domain::logger::Logger;
use crate::domain::shopcart::gateway::ShopcartGateway;

pub struct DeleteItemUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub search: Arc<dyn SearchShopcartUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        let (Some(shopcart_id), Some(item_id)) = (state.form.shopcart_id(), state.form.item_id())
        else {
            return Err(ConsoleError::Validation(
                "Both Shopcart ID and Item ID are required to delete an item.",
            ));
        };
        state.flash.clear();
        self.logger.info(&format!(
            "Deleting item {} from shopcart {}",
            item_id, shopcart_id
        ));

        self.gateway
            .delete_item(&shopcart_id, &item_id)
            .await
            .map_err(ConsoleError::request_failed("Error deleting item."))?;

        state.form.clear_item();
        if let Err(err) = self.search.execute(state).await {
            self.logger
                .warn(&format!("Item listing refresh failed: {}", err));
        }
        // the refresh loads the first remaining item into the form
        state.form.clear_item();

        state.flash.show("Item has been Deleted!");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::console::search_shopcart::SearchShopcartUseCaseImpl;
    use crate::application::console::test_support::{
        MockGateway, item, item_form_state, mock_logger, shopcart_with,
    };
    use crate::domain::console::form::ItemFields;
    use crate::domain::errors::GatewayError;
    use crate::domain::shared::value_objects::ResourceId;

    fn use_case(gateway: MockGateway) -> DeleteItemUseCaseImpl {
        let gateway: Arc<dyn ShopcartGateway> = Arc::new(gateway);
        DeleteItemUseCaseImpl {
            gateway: gateway.clone(),
            search: Arc::new(SearchShopcartUseCaseImpl {
                gateway,
                logger: mock_logger(),
            }),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_delete_item_and_refresh_listing() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_delete_item()
            .withf(|shopcart_id, item_id| {
                shopcart_id == &ResourceId::new("7") && item_id == &ResourceId::new("1")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        gateway
            .expect_get_shopcart()
            .returning(|_| Ok(shopcart_with("42", vec![item("2", "Bread", 1, 2.25)])));
        let mut state = item_form_state();

        let result = use_case(gateway).execute(&mut state).await;

        assert!(result.is_ok());
        assert_eq!(state.form.item_snapshot(), ItemFields::default());
        assert_eq!(state.form.shopcart_id, "7");
        assert!(state.item_results.contains("<td>Bread</td>"));
        assert_eq!(state.flash.as_str(), "Item has been Deleted!");
    }

    #[tokio::test]
    async fn should_keep_fields_when_delete_fails() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_delete_item()
            .returning(|_, _| Err(GatewayError::rejected(500, None)));
        let mut state = item_form_state();

        let error = use_case(gateway).execute(&mut state).await.unwrap_err();

        assert_eq!(error.flash_message(), "Error deleting item.");
        assert_eq!(state.form.name, "Milk");
    }
}
