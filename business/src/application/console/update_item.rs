use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::search_shopcart::SearchShopcartUseCase;
use crate::domain::console::use_cases::update_item::UpdateItemUseCase;
use crate::domain::logger::Logger;
use crate::domain::shopcart::gateway::ShopcartGateway;

use super::add_item::draft_from_form;

pub struct UpdateItemUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub search: Arc<dyn SearchShopcartUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        let (Some(shopcart_id), Some(item_id)) = (state.form.shopcart_id(), state.form.item_id())
        else {
            return Err(ConsoleError::Validation(
                "Both Shopcart ID and Item ID are required for updating.",
            ));
        };
        if !state.form.has_item_details() {
            return Err(ConsoleError::Validation(
                "Item Name, Quantity, and Price are required fields.",
            ));
        }

        let draft = draft_from_form(&state.form, item_id.clone(), self.logger.as_ref());
        state.flash.clear();
        self.logger.info(&format!(
            "Updating item {} in shopcart {}",
            item_id, shopcart_id
        ));

        let item = self
            .gateway
            .update_item(&shopcart_id, &item_id, &draft)
            .await
            .map_err(ConsoleError::request_failed("Error updating item."))?;

        state.form.fill_item(&item);
        let updated = state.form.item_snapshot();

        if let Err(err) = self.search.execute(state).await {
            self.logger
                .warn(&format!("Item listing refresh failed: {}", err));
        }
        state.form.restore_item(updated);

        state.flash.show("Item successfully updated!");
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
    use crate::domain::errors::GatewayError;
    use crate::domain::shared::value_objects::ResourceId;

    fn use_case(gateway: MockGateway) -> UpdateItemUseCaseImpl {
        let gateway: Arc<dyn ShopcartGateway> = Arc::new(gateway);
        UpdateItemUseCaseImpl {
            gateway: gateway.clone(),
            search: Arc::new(SearchShopcartUseCaseImpl {
                gateway,
                logger: mock_logger(),
            }),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_update_item_and_refresh_listing() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_update_item()
            .withf(|shopcart_id, item_id, draft| {
                shopcart_id == &ResourceId::new("7")
                    && item_id == &ResourceId::new("2")
                    && draft.quantity == Some(20)
            })
            .times(1)
            .returning(|_, _, _| Ok(item("2", "Bread", 20, 2.25)));
        gateway.expect_get_shopcart().times(1).returning(|_| {
            Ok(shopcart_with(
                "42",
                vec![item("1", "Milk", 2, 3.5), item("2", "Bread", 20, 2.25)],
            ))
        });
        let mut state = item_form_state();
        state.form.item_id = "2".to_string();
        state.form.name = "Bread".to_string();
        state.form.quantity = "20".to_string();

        let result = use_case(gateway).execute(&mut state).await;

        assert!(result.is_ok());
        assert_eq!(state.form.item_id, "2");
        assert_eq!(state.form.quantity, "20");
        assert!(state.item_results.contains("<td>Bread</td><td>20</td>"));
        assert_eq!(state.flash.as_str(), "Item successfully updated!");
    }

    #[tokio::test]
    async fn should_require_both_ids() {
        let mut gateway = MockGateway::new();
        gateway.expect_update_item().never();
        let mut state = item_form_state();
        state.form.item_id.clear();

        let error = use_case(gateway).execute(&mut state).await.unwrap_err();

        assert_eq!(
            error.flash_message(),
            "Both Shopcart ID and Item ID are required for updating."
        );
    }

    #[tokio::test]
    async fn should_require_item_details() {
        let mut gateway = MockGateway::new();
        gateway.expect_update_item().never();
        let mut state = item_form_state();
        state.form.price.clear();

        let error = use_case(gateway).execute(&mut state).await.unwrap_err();

        assert_eq!(
            error.flash_message(),
            "Item Name, Quantity, and Price are required fields."
        );
    }

    #[tokio::test]
    async fn should_use_fallback_when_update_fails() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_update_item()
            .returning(|_, _, _| Err(GatewayError::unavailable()));
        gateway.expect_get_shopcart().never();
        let mut state = item_form_state();

        let error = use_case(gateway).execute(&mut state).await.unwrap_err();

        assert_eq!(error.flash_message(), "Error updating item.");
    }
}
