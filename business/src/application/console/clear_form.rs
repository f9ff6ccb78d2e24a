use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::clear_form::ClearFormUseCase;
use crate::domain::logger::Logger;

pub struct ClearFormUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearFormUseCase for ClearFormUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        self.logger.debug("Clearing console form");
        state.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::console::test_support::{item_form_state, mock_logger};
    use crate::domain::console::form::FormFields;

    #[tokio::test]
    async fn should_blank_fields_results_and_flash() {
        let use_case = ClearFormUseCaseImpl {
            logger: mock_logger(),
        };
        let mut state = item_form_state();
        state.form.customer_id = "42".to_string();
        state.flash.show("Success");
        state.item_results = "<table></table>".to_string();
        state.shopcart_rows = "<tr><td>7</td><td>42</td></tr>".to_string();

        let result = use_case.execute(&mut state).await;

        assert!(result.is_ok());
        assert_eq!(state.form, FormFields::default());
        assert!(state.flash.is_empty());
        assert!(state.item_results.is_empty());
        assert!(state.shopcart_rows.is_empty());
    }
}
