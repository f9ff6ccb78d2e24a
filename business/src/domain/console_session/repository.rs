use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::ConsoleSession;

#[async_trait]
pub trait ConsoleSessionRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<ConsoleSession, RepositoryError>;
    async fn save(&self, session: &ConsoleSession) -> Result<(), RepositoryError>;
    /// Stores a session that must still exist; `NotFound` otherwise.
    async fn update(&self, session: &ConsoleSession) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
