use chrono::{DateTime, Utc};
use uuid::Uuid;

use business::domain::console::state::ConsoleState;
use business::domain::console_session::model::ConsoleSession;

/// Stored form of a console session.
#[derive(Debug, Clone)]
pub struct ConsoleSessionEntity {
    pub id: Uuid,
    pub state: ConsoleState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConsoleSessionEntity {
    pub fn from_domain(session: &ConsoleSession) -> Self {
        Self {
            id: session.id,
            state: session.state.clone(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }

    pub fn into_domain(self) -> ConsoleSession {
        ConsoleSession::from_repository(self.id, self.state, self.created_at, self.updated_at)
    }
}
