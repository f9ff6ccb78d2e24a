use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::render;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::list_shopcarts::ListShopcartsUseCase;
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::shopcart::gateway::ShopcartGateway;
use crate::domain::shopcart::model::{ShopcartQuery, ShopcartSummary};

pub struct ListShopcartsUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListShopcartsUseCase for ListShopcartsUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.shopcart_rows.clear();
        state.flash.clear();
        self.logger.info("Listing all shopcarts");

        let shopcarts = self
            .gateway
            .list_shopcarts(&ShopcartQuery::all())
            .await
            .map_err(|e| listing_error(e, "Error listing shopcarts"))?;

        self.logger
            .info(&format!("Listed {} shopcarts", shopcarts.len()));
        show_listing(state, &shopcarts);
        Ok(())
    }
}

/// Writes a shopcart collection into the listing and flash.
pub(crate) fn show_listing(state: &mut ConsoleState, shopcarts: &[ShopcartSummary]) {
    state.shopcart_rows = render::shopcart_rows(shopcarts);
    if shopcarts.is_empty() {
        state.flash.show("No shopcarts found");
    } else {
        state.flash.show("Success");
    }
}

pub(crate) fn listing_error(error: GatewayError, fallback: &'static str) -> ConsoleError {
    match error {
        GatewayError::UnexpectedResponse => {
            ConsoleError::UnexpectedFormat("Unexpected response format")
        }
        other => ConsoleError::request_failed(fallback)(other),
    }
}
