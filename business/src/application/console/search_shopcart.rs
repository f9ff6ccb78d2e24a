use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::render;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::search_shopcart::SearchShopcartUseCase;
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::shopcart::gateway::ShopcartGateway;
use crate::domain::shopcart::model::ShopcartDetails;

pub(crate) const FORMAT_ERROR: &str = "Error: Unexpected response format.";

pub struct SearchShopcartUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub logger: Arc<dyn Logger>,
}

impl SearchShopcartUseCaseImpl {
    fn reject_format(state: &mut ConsoleState) -> ConsoleError {
        state.item_results = render::UNEXPECTED_FORMAT.to_string();
        ConsoleError::UnexpectedFormat(FORMAT_ERROR)
    }
}

#[async_trait]
impl SearchShopcartUseCase for SearchShopcartUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.item_results.clear();
        state.flash.clear();

        let shopcart_id = state.form.shopcart_id().ok_or(ConsoleError::Validation(
            "Please enter a Shopcart ID to search.",
        ))?;
        self.logger
            .info(&format!("Searching shopcart: {}", shopcart_id));

        let details = match self.gateway.get_shopcart(&shopcart_id).await {
            Ok(details) => details,
            Err(GatewayError::UnexpectedResponse) => return Err(Self::reject_format(state)),
            Err(other) => return Err(ConsoleError::request_failed("An error occurred")(other)),
        };

        let ShopcartDetails {
            customer_id: Some(customer_id),
            items: Some(items),
            ..
        } = details
        else {
            self.logger.warn(&format!(
                "Shopcart {} came back without customer id or items",
                shopcart_id
            ));
            return Err(Self::reject_format(state));
        };

        state.form.customer_id = customer_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        state.item_results = render::item_table(&items);
        if let Some(first) = items.first() {
            state.form.fill_item(first);
        }

        self.logger.info(&format!(
            "Shopcart {} has {} items",
            shopcart_id,
            items.len()
        ));
        state.flash.show("Success");
        Ok(())
    }
}
