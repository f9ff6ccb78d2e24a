use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::paste_id::PasteShopcartIdUseCase;
use crate::domain::logger::Logger;

pub struct PasteShopcartIdUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PasteShopcartIdUseCase for PasteShopcartIdUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        let value = state.clipboard.value().unwrap_or_default().to_string();
        self.logger
            .debug(&format!("Pasting shopcart id from clipboard: {}", value));

        state.form.shopcart_id = value;
        state.flash.show("Shopcart ID pasted from clipboard!");
        Ok(())
    }
}
