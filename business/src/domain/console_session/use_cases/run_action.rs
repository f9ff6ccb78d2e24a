use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::console::action::ConsoleAction;
use crate::domain::console::form::FormInput;
use crate::domain::console_session::errors::ConsoleSessionError;
use crate::domain::console_session::model::ConsoleSession;

pub struct RunConsoleActionParams {
    pub session_id: Uuid,
    pub action: ConsoleAction,
    /// Field values typed in before the button was pressed.
    pub input: FormInput,
}

/// Presses a console button. Action failures land in the flash area; only
/// session problems are returned as errors.
#[async_trait]
pub trait RunConsoleActionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RunConsoleActionParams,
    ) -> Result<ConsoleSession, ConsoleSessionError>;
}
