use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::console::errors::ConsoleError;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::copy_id::CopyShopcartIdUseCase;
use crate::domain::logger::Logger;

pub struct CopyShopcartIdUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CopyShopcartIdUseCase for CopyShopcartIdUseCaseImpl {
    async fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.clipboard.copy(state.form.shopcart_id.clone());
        self.logger.debug(&format!(
            "Clipboard contains: {}",
            state.clipboard.value().unwrap_or_default()
        ));

        state.flash.show("Shopcart ID copied to clipboard!");
        Ok(())
    }
}
