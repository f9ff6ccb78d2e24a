use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::form::FormFields;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::add_item::AddItemUseCase;
use crate::domain::console::use_cases::search_shopcart::SearchShopcartUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ResourceId;
use crate::domain::shopcart::gateway::ShopcartGateway;
use crate::domain::shopcart::model::ItemDraft;

pub struct AddItemUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub search: Arc<dyn SearchShopcartUseCase>,
    pub logger: Arc<dyn Logger>,
}

/// Builds the item payload from the form, warning about values that will
/// travel as `null`.
pub(crate) fn draft_from_form(
    form: &FormFields,
    item_id: ResourceId,
    logger: &dyn Logger,
) -> ItemDraft {
    let draft = ItemDraft::new(
        item_id,
        &form.name,
        &form.quantity,
        &form.price,
        &form.description,
    );
    if draft.quantity.is_none() {
        logger.warn(&format!("Quantity '{}' is not an integer", form.quantity));
    }
    if draft.price.is_none() {
        logger.warn(&format!("Price '{}' is not a number", form.price));
    }
    draft
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        let shopcart_id = state.form.shopcart_id().ok_or(ConsoleError::Validation(
            "Shopcart ID is required to add an item.",
        ))?;
        let item_id = state
            .form
            .item_id()
            .filter(|_| state.form.has_item_details())
            .ok_or(ConsoleError::Validation(
                "Item Name, Quantity, Price, and Item ID are required.",
            ))?;

        let draft = draft_from_form(&state.form, item_id, self.logger.as_ref());
        state.flash.clear();
        self.logger.info(&format!(
            "Adding item {} to shopcart {}",
            draft.id, shopcart_id
        ));

        let item = self
            .gateway
            .add_item(&shopcart_id, &draft)
            .await
            .map_err(ConsoleError::request_failed("Error adding item."))?;

        state.form.fill_item(&item);
        let added = state.form.item_snapshot();

        if let Err(err) = self.search.execute(state).await {
            self.logger
                .warn(&format!("Item listing refresh failed: {}", err));
        }
        state.form.restore_item(added);

        state.flash.show(format!(
            "Success: Item added to Shopcart {}!",
            shopcart_id
        ));
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

    fn use_case(gateway: MockGateway) -> AddItemUseCaseImpl {
        let gateway: Arc<dyn ShopcartGateway> = Arc::new(gateway);
        AddItemUseCaseImpl {
            gateway: gateway.clone(),
            search: Arc::new(SearchShopcartUseCaseImpl {
                gateway,
                logger: mock_logger(),
            }),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_send_numeric_quantity_and_price() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_add_item()
            .withf(|shopcart_id, draft| {
                shopcart_id == &ResourceId::new("7")
                    && draft.id == ResourceId::new("1")
                    && draft.name == "Milk"
                    && draft.quantity == Some(2)
                    && draft.price == Some(3.5)
            })
            .times(1)
            .returning(|_, _| Ok(item("1", "Milk", 2, 3.5)));
        gateway
            .expect_get_shopcart()
            .returning(|_| Ok(shopcart_with("42", vec![item("1", "Milk", 2, 3.5)])));
        let mut state = item_form_state();

        let result = use_case(gateway).execute(&mut state).await;

        assert!(result.is_ok());
        assert_eq!(state.flash.as_str(), "Success: Item added to Shopcart 7!");
    }

    #[tokio::test]
    async fn should_restore_added_item_after_refresh() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_add_item()
            .returning(|_, _| Ok(item("5", "Eggs", 12, 4.0)));
        gateway.expect_get_shopcart().returning(|_| {
            Ok(shopcart_with(
                "42",
                vec![item("1", "Milk", 2, 3.5), item("5", "Eggs", 12, 4.0)],
            ))
        });
        let mut state = item_form_state();

        use_case(gateway).execute(&mut state).await.unwrap();

        assert_eq!(state.form.item_id, "5");
        assert_eq!(state.form.name, "Eggs");
        assert_eq!(state.form.quantity, "12");
        assert_eq!(state.form.price, "4");
        assert_eq!(state.form.customer_id, "42");
        assert!(state.item_results.contains(r#"<tr id="row_1">"#));
    }

    #[tokio::test]
    async fn should_send_null_for_malformed_numbers() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_add_item()
            .withf(|_, draft| draft.quantity.is_none() && draft.price.is_none())
            .returning(|_, _| Err(GatewayError::rejected(400, None)));
        let mut state = item_form_state();
        state.form.quantity = "two".to_string();
        state.form.price = "free".to_string();

        let error = use_case(gateway).execute(&mut state).await.unwrap_err();

        assert_eq!(error.flash_message(), "Error adding item.");
    }

    #[tokio::test]
    async fn should_require_shopcart_id() {
        let mut gateway = MockGateway::new();
        gateway.expect_add_item().never();
        let mut state = item_form_state();
        state.form.shopcart_id = String::new();

        let error = use_case(gateway).execute(&mut state).await.unwrap_err();

        assert_eq!(error.flash_message(), "Shopcart ID is required to add an item.");
    }

    #[tokio::test]
    async fn should_require_item_id_and_details() {
        for blank in ["item_id", "name", "quantity", "price"] {
            let mut gateway = MockGateway::new();
            gateway.expect_add_item().never();
            let mut state = item_form_state();
            match blank {
                "item_id" => state.form.item_id.clear(),
                "name" => state.form.name.clear(),
                "quantity" => state.form.quantity.clear(),
                _ => state.form.price.clear(),
            }

            let error = use_case(gateway).execute(&mut state).await.unwrap_err();

            assert_eq!(
                error.flash_message(),
                "Item Name, Quantity, Price, and Item ID are required."
            );
        }
    }

    #[tokio::test]
    async fn should_allow_blank_description() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_add_item()
            .withf(|_, draft| draft.description.is_empty())
            .returning(|_, _| Ok(item("1", "Milk", 2, 3.5)));
        gateway
            .expect_get_shopcart()
            .returning(|_| Ok(shopcart_with("42", vec![])));
        let mut state = item_form_state();
        state.form.description.clear();

        let result = use_case(gateway).execute(&mut state).await;

        assert!(result.is_ok());
    }
}
