use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::form::is_blank;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::find_by_item::FindShopcartsByItemUseCase;
use crate::domain::logger::Logger;
use crate::domain::shopcart::gateway::ShopcartGateway;
use crate::domain::shopcart::model::ShopcartQuery;

use super::list_shopcarts::{listing_error, show_listing};

pub struct FindShopcartsByItemUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindShopcartsByItemUseCase for FindShopcartsByItemUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.shopcart_rows.clear();
        state.flash.clear();

        if is_blank(&state.form.name) {
            return Err(ConsoleError::Validation(
                "Item Name is required to find shopcarts.",
            ));
        }
        let name = state.form.name.trim().to_string();
        self.logger
            .info(&format!("Finding shopcarts holding item: {}", name));

        let shopcarts = self
            .gateway
            .list_shopcarts(&ShopcartQuery::by_item_name(name))
            .await
            .map_err(|e| listing_error(e, "Error finding shopcarts"))?;

        show_listing(state, &shopcarts);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::console::test_support::{MockGateway, mock_logger};
    use crate::domain::errors::GatewayError;
    use crate::domain::shared::value_objects::ResourceId;
    use crate::domain::shopcart::model::ShopcartSummary;

    fn use_case(gateway: MockGateway) -> FindShopcartsByItemUseCaseImpl {
        FindShopcartsByItemUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_query_by_item_name() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list_shopcarts()
            .withf(|query| query == &ShopcartQuery::by_item_name("Bananas"))
            .returning(|_| {
                Ok(vec![ShopcartSummary {
                    id: Some(ResourceId::new("7")),
                    customer_id: Some(ResourceId::new("42")),
                }])
            });
        let mut state = ConsoleState::new();
        state.form.name = "Bananas ".to_string();

        use_case(gateway).execute(&mut state).await.unwrap();

        assert_eq!(state.shopcart_rows, "<tr><td>7</td><td>42</td></tr>");
        assert_eq!(state.flash.as_str(), "Success");
    }

    #[tokio::test]
    async fn should_require_item_name() {
        let mut gateway = MockGateway::new();
        gateway.expect_list_shopcarts().never();
        let mut state = ConsoleState::new();

        let error = use_case(gateway).execute(&mut state).await.unwrap_err();

        assert_eq!(error.flash_message(), "Item Name is required to find shopcarts.");
    }

    #[tokio::test]
    async fn should_use_fallback_when_server_fails() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list_shopcarts()
            .returning(|_| Err(GatewayError::unavailable()));
        let mut state = ConsoleState::new();
        state.form.name = "Bananas".to_string();

        let error = use_case(gateway).execute(&mut state).await.unwrap_err();

        assert_eq!(error.flash_message(), "Error finding shopcarts");
    }
}
