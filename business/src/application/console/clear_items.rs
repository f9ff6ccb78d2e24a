use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::clear_items::ClearItemsUseCase;
use crate::domain::console::use_cases::search_shopcart::SearchShopcartUseCase;
use crate::domain::logger::Logger;
use crate::domain::shopcart::gateway::ShopcartGateway;

pub struct ClearItemsUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub search: Arc<dyn SearchShopcartUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearItemsUseCase for ClearItemsUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        let shopcart_id = state.form.shopcart_id().ok_or(ConsoleError::Validation(
            "Shopcart ID is required to clear items.",
        ))?;
        state.flash.clear();
        self.logger
            .info(&format!("Clearing items of shopcart: {}", shopcart_id));

        self.gateway
            .clear_items(&shopcart_id)
            .await
            .map_err(ConsoleError::request_failed("Error clearing items."))?;

        state.form.clear_item();
        if let Err(err) = self.search.execute(state).await {
            self.logger
                .warn(&format!("Item listing refresh failed: {}", err));
        }

        state.flash.show(format!(
            "All items removed from Shopcart {}!",
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
        MockGateway, item_form_state, mock_logger, shopcart_with,
    };
    use crate::domain::console::render;
    use crate::domain::errors::GatewayError;

    fn use_case(gateway: MockGateway) -> ClearItemsUseCaseImpl {
        let gateway: Arc<dyn ShopcartGateway> = Arc::new(gateway);
        ClearItemsUseCaseImpl {
            gateway: gateway.clone(),
            search: Arc::new(SearchShopcartUseCaseImpl {
                gateway,
                logger: mock_logger(),
            }),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_clear_items_and_show_empty_listing() {
        let mut gateway = MockGateway::new();
        gateway.expect_clear_items().times(1).returning(|_| Ok(()));
        gateway
            .expect_get_shopcart()
            .returning(|_| Ok(shopcart_with("42", vec![])));
        let mut state = item_form_state();

        let result = use_case(gateway).execute(&mut state).await;

        assert!(result.is_ok());
        assert_eq!(state.form.name, "");
        assert!(state.item_results.contains(render::NO_ITEMS_ROW));
        assert_eq!(state.flash.as_str(), "All items removed from Shopcart 7!");
    }

    #[tokio::test]
    async fn should_show_server_message_on_failure() {
        let mut gateway = MockGateway::new();
        gateway.expect_clear_items().returning(|_| {
            Err(GatewayError::rejected(
                404,
                Some("Shopcart with id '7' was not found.".to_string()),
            ))
        });
        let mut state = item_form_state();

        let error = use_case(gateway).execute(&mut state).await.unwrap_err();

        assert_eq!(error.flash_message(), "Shopcart with id '7' was not found.");
    }
}
