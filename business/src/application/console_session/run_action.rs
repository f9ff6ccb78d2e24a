use std::sync::Arc;

use async_trait::async_trait;

use crate::application::console::controller::ConsoleController;
use crate::domain::console_session::errors::ConsoleSessionError;
use crate::domain::console_session::model::ConsoleSession;
use crate::domain::console_session::repository::ConsoleSessionRepository;
use crate::domain::console_session::use_cases::run_action::{
    RunConsoleActionParams, RunConsoleActionUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RunConsoleActionUseCaseImpl {
    pub repository: Arc<dyn ConsoleSessionRepository>,
    pub controller: Arc<ConsoleController>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RunConsoleActionUseCase for RunConsoleActionUseCaseImpl {
    async fn execute(
        &self,
        params: RunConsoleActionParams,
    ) -> Result<ConsoleSession, ConsoleSessionError> {
        let mut session = self
            .repository
            .get_by_id(params.session_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ConsoleSessionError::NotFound,
                other => ConsoleSessionError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Console session {} pressed {}",
            session.id, params.action
        ));

        session.state.form.apply(params.input);
        self.controller
            .dispatch(params.action, &mut session.state)
            .await;
        session.touch();

        // Last store wins when two actions race on one session. A session
        // closed while the action ran stays closed.
        self.repository
            .update(&session)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ConsoleSessionError::NotFound,
                other => ConsoleSessionError::Repository(other),
            })?;
        Ok(session)
    }
}
