use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::console_session::model::ConsoleSession;
use business::domain::console_session::repository::ConsoleSessionRepository;
use business::domain::errors::RepositoryError;

use super::entity::ConsoleSessionEntity;

/// Keeps console sessions in process memory. Nothing survives a restart.
///
/// With an idle TTL, a session untouched for longer than the TTL is gone:
/// reads and updates see `NotFound`, and every save sweeps expired entries.
#[derive(Default)]
pub struct ConsoleSessionRepositoryInMemory {
    sessions: RwLock<HashMap<Uuid, ConsoleSessionEntity>>,
    idle_ttl: Option<TimeDelta>,
}

impl ConsoleSessionRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: TimeDelta) -> Self {
        Self {
            sessions: RwLock::default(),
            idle_ttl: Some(idle_ttl),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn is_expired(&self, entity: &ConsoleSessionEntity) -> bool {
        self.idle_ttl
            .is_some_and(|ttl| Utc::now() - entity.updated_at > ttl)
    }

    fn sweep(&self, sessions: &mut HashMap<Uuid, ConsoleSessionEntity>) {
        let before = sessions.len();
        sessions.retain(|_, entity| !self.is_expired(entity));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, "idle console sessions evicted");
        }
    }
}

#[async_trait]
impl ConsoleSessionRepository for ConsoleSessionRepositoryInMemory {
    async fn get_by_id(&self, id: Uuid) -> Result<ConsoleSession, RepositoryError> {
        {
            let sessions = self.sessions.read().await;
            let entity = sessions.get(&id).ok_or(RepositoryError::NotFound)?;
            if !self.is_expired(entity) {
                return Ok(entity.clone().into_domain());
            }
        }

        self.sessions.write().await.remove(&id);
        tracing::debug!(session_id = %id, "idle console session evicted");
        Err(RepositoryError::NotFound)
    }

    async fn save(&self, session: &ConsoleSession) -> Result<(), RepositoryError> {
        let entity = ConsoleSessionEntity::from_domain(session);
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions);
        sessions.insert(entity.id, entity);

        tracing::debug!(session_id = %session.id, "console session stored");
        Ok(())
    }

    async fn update(&self, session: &ConsoleSession) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        let expired = match sessions.get(&session.id) {
            Some(stored) => self.is_expired(stored),
            None => return Err(RepositoryError::NotFound),
        };
        if expired {
            sessions.remove(&session.id);
            return Err(RepositoryError::NotFound);
        }
        sessions.insert(session.id, ConsoleSessionEntity::from_domain(session));

        tracing::debug!(session_id = %session.id, "console session updated");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_saved_session() {
        let repository = ConsoleSessionRepositoryInMemory::new();
        let mut session = ConsoleSession::new();
        session.state.form.shopcart_id = "7".to_string();
        session.state.clipboard.copy("7");

        repository.save(&session).await.unwrap();
        let stored = repository.get_by_id(session.id).await.unwrap();

        assert_eq!(stored.id, session.id);
        assert_eq!(stored.state, session.state);
    }

    #[tokio::test]
    async fn should_overwrite_on_second_save() {
        let repository = ConsoleSessionRepositoryInMemory::new();
        let mut session = ConsoleSession::new();
        repository.save(&session).await.unwrap();

        session.state.flash.show("Success");
        repository.save(&session).await.unwrap();

        let stored = repository.get_by_id(session.id).await.unwrap();
        assert_eq!(stored.state.flash.as_str(), "Success");
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let repository = ConsoleSessionRepositoryInMemory::new();

        let result = repository.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn should_delete_session() {
        let repository = ConsoleSessionRepositoryInMemory::new();
        let session = ConsoleSession::new();
        repository.save(&session).await.unwrap();

        repository.delete(session.id).await.unwrap();

        assert!(repository.get_by_id(session.id).await.is_err());
        assert!(matches!(
            repository.delete(session.id).await.unwrap_err(),
            RepositoryError::NotFound
        ));
    }

    #[tokio::test]
    async fn should_update_stored_session() {
        let repository = ConsoleSessionRepositoryInMemory::new();
        let mut session = ConsoleSession::new();
        repository.save(&session).await.unwrap();

        session.state.flash.show("Success");
        repository.update(&session).await.unwrap();

        let stored = repository.get_by_id(session.id).await.unwrap();
        assert_eq!(stored.state.flash.as_str(), "Success");
    }

    #[tokio::test]
    async fn should_not_bring_back_deleted_session_on_update() {
        let repository = ConsoleSessionRepositoryInMemory::new();
        let session = ConsoleSession::new();
        repository.save(&session).await.unwrap();
        repository.delete(session.id).await.unwrap();

        let result = repository.update(&session).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::NotFound));
        assert_eq!(repository.len().await, 0);
    }

    #[tokio::test]
    async fn should_expire_idle_session() {
        let repository = ConsoleSessionRepositoryInMemory::with_idle_ttl(TimeDelta::hours(1));
        let mut session = ConsoleSession::new();
        session.updated_at = Utc::now() - TimeDelta::hours(2);
        repository.save(&session).await.unwrap();

        assert!(matches!(
            repository.get_by_id(session.id).await.unwrap_err(),
            RepositoryError::NotFound
        ));
        assert!(matches!(
            repository.update(&session).await.unwrap_err(),
            RepositoryError::NotFound
        ));
        assert_eq!(repository.len().await, 0);
    }

    #[tokio::test]
    async fn should_keep_recently_used_session() {
        let repository = ConsoleSessionRepositoryInMemory::with_idle_ttl(TimeDelta::hours(1));
        let session = ConsoleSession::new();
        repository.save(&session).await.unwrap();

        assert!(repository.get_by_id(session.id).await.is_ok());
    }

    #[tokio::test]
    async fn should_sweep_expired_sessions_on_save() {
        let repository = ConsoleSessionRepositoryInMemory::with_idle_ttl(TimeDelta::hours(1));
        let mut stale = ConsoleSession::new();
        stale.updated_at = Utc::now() - TimeDelta::hours(3);
        repository.save(&stale).await.unwrap();

        repository.save(&ConsoleSession::new()).await.unwrap();

        assert_eq!(repository.len().await, 1);
    }
}
