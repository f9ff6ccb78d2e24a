use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::find_by_customer::FindShopcartsByCustomerUseCase;
use crate::domain::logger::Logger;
use crate::domain::shopcart::gateway::ShopcartGateway;
use crate::domain::shopcart::model::ShopcartQuery;

use super::list_shopcarts::{listing_error, show_listing};

pub struct FindShopcartsByCustomerUseCaseImpl {
    pub gateway: Arc<dyn ShopcartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindShopcartsByCustomerUseCase for FindShopcartsByCustomerUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.shopcart_rows.clear();
        state.flash.clear();

        let customer_id = state.form.customer_id().ok_or(ConsoleError::Validation(
            "Customer ID is required to find shopcarts.",
        ))?;
        self.logger
            .info(&format!("Finding shopcarts of customer: {}", customer_id));

        let shopcarts = self
            .gateway
            .list_shopcarts(&ShopcartQuery::by_customer(customer_id))
            .await
            .map_err(|e| listing_error(e, "Error finding shopcarts"))?;

        show_listing(state, &shopcarts);
        Ok(())
    }
}
