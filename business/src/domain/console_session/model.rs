use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::console::state::ConsoleState;

/// One open console: its state plus bookkeeping.
#[derive(Debug, Clone)]
pub struct ConsoleSession {
    pub id: Uuid,
    pub state: ConsoleState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConsoleSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            state: ConsoleState::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already held by the repository.
    pub fn from_repository(
        id: Uuid,
        state: ConsoleState,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            state,
            created_at,
            updated_at,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for ConsoleSession {
    fn default() -> Self {
        Self::new()
    }
}
