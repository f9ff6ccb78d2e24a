use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::form::is_blank;
use crate::domain::console::render;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::list_items::ListItemsUseCase;
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::shopcart::gateway::ShopcartGateway;
use crate::domain::shopcart::model::{ItemQuery, parse_quantity};

use super::search_shopcart::FORMAT_ERROR;

pub struct ListItemsUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListItemsUseCase for ListItemsUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.item_results.clear();
        state.flash.clear();

        let shopcart_id = state.form.shopcart_id().ok_or(ConsoleError::Validation(
            "Shopcart ID is required to list items.",
        ))?;
        let query = ItemQuery {
            name: (!is_blank(&state.form.name)).then(|| state.form.name.trim().to_string()),
            quantity: parse_quantity(&state.form.quantity),
        };
        self.logger.info(&format!(
            "Listing items of shopcart {} (name: {:?}, quantity: {:?})",
            shopcart_id, query.name, query.quantity
        ));

        let items = match self.gateway.list_items(&shopcart_id, &query).await {
            Ok(items) => items,
            Err(GatewayError::UnexpectedResponse) => {
                state.item_results = render::UNEXPECTED_FORMAT.to_string();
                return Err(ConsoleError::UnexpectedFormat(FORMAT_ERROR));
            }
            Err(other) => return Err(ConsoleError::request_failed("Error listing items.")(other)),
        };

        state.item_results = render::item_table(&items);
        if items.is_empty() {
            state.flash.show("No items found");
        } else {
            state.flash.show("Success");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::console::test_support::{MockGateway, item, mock_logger};
    use crate::domain::shared::value_objects::ResourceId;

    fn use_case(gateway: MockGateway) -> ListItemsUseCaseImpl {
        ListItemsUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        }
    }

    fn shopcart_state() -> ConsoleState {
        let mut state = ConsoleState::new();
        state.form.shopcart_id = "7".to_string();
        state
    }

    #[tokio::test]
    async fn should_list_every_item_without_filters() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list_items()
            .withf(|id, query| id == &ResourceId::new("7") && query == &ItemQuery::default())
            .returning(|_, _| Ok(vec![item("1", "Milk", 2, 3.5), item("2", "Bread", 1, 2.25)]));
        let mut state = shopcart_state();

        use_case(gateway).execute(&mut state).await.unwrap();

        assert!(state.item_results.contains(r#"<tr id="row_1">"#));
        assert!(state.item_results.contains(r#"<tr id="row_2">"#));
        assert_eq!(state.flash.as_str(), "Success");
    }

    #[tokio::test]
    async fn should_filter_by_typed_name_and_quantity() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list_items()
            .withf(|_, query| query.name.as_deref() == Some("Milk") && query.quantity == Some(7))
            .returning(|_, _| Ok(vec![item("1", "Milk", 7, 3.5)]));
        let mut state = shopcart_state();
        state.form.name = " Milk ".to_string();
        state.form.quantity = "7".to_string();

        let result = use_case(gateway).execute(&mut state).await;

        assert!(result.is_ok());
        assert_eq!(state.form.name, " Milk ");
    }

    #[tokio::test]
    async fn should_render_placeholder_when_no_item_matches() {
        let mut gateway = MockGateway::new();
        gateway.expect_list_items().returning(|_, _| Ok(vec![]));
        let mut state = shopcart_state();

        use_case(gateway).execute(&mut state).await.unwrap();

        assert!(state.item_results.contains(render::NO_ITEMS_ROW));
        assert_eq!(state.flash.as_str(), "No items found");
    }

    #[tokio::test]
    async fn should_require_shopcart_id() {
        let mut gateway = MockGateway::new();
        gateway.expect_list_items().never();
        let mut state = ConsoleState::new();

        let error = use_case(gateway).execute(&mut state).await.unwrap_err();

        assert_eq!(error.flash_message(), "Shopcart ID is required to list items.");
    }

    #[tokio::test]
    async fn should_replace_results_on_unexpected_format() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list_items()
            .returning(|_, _| Err(GatewayError::UnexpectedResponse));
        let mut state = shopcart_state();
        state.item_results = "<table>stale</table>".to_string();

        let error = use_case(gateway).execute(&mut state).await.unwrap_err();

        assert_eq!(error.flash_message(), FORMAT_ERROR);
        assert_eq!(state.item_results, render::UNEXPECTED_FORMAT);
    }

    #[tokio::test]
    async fn should_clear_results_and_use_fallback_on_failure() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list_items()
            .returning(|_, _| Err(GatewayError::rejected(500, None)));
        let mut state = shopcart_state();
        state.item_results = "<table>stale</table>".to_string();

        let error = use_case(gateway).execute(&mut state).await.unwrap_err();

        assert_eq!(error.flash_message(), "Error listing items.");
        assert!(state.item_results.is_empty());
    }
}
