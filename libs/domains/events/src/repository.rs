use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::EventResult;
use crate::models::{Event, NewEvent};

/// Event persistence. Implementations assign the id on [`create`](Self::create).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Store a finalized event and return it with its new id
    async fn create(&self, event: NewEvent) -> EventResult<Event>;

    async fn get_by_id(&self, id: Uuid) -> EventResult<Option<Event>>;

    /// Number of stored events
    async fn count(&self) -> EventResult<u64>;
}

/// Process-local store used when no database is configured, and in tests.
///
/// Clones share the same map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, event: NewEvent) -> EventResult<Event> {
        let event = Event::from_new(Uuid::now_v7(), event);
        self.events.write().await.insert(event.id, event.clone());

        tracing::info!(event_id = %event.id, "Created event");
        Ok(event)
    }

    async fn get_by_id(&self, id: Uuid) -> EventResult<Option<Event>> {
        Ok(self.events.read().await.get(&id).cloned())
    }

    async fn count(&self) -> EventResult<u64> {
        Ok(self.events.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::spring_submission;

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = InMemoryEventRepository::new();

        let first = repo
            .create(NewEvent::finalize(spring_submission()))
            .await
            .unwrap();
        let second = repo
            .create(NewEvent::finalize(spring_submission()))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let repo = InMemoryEventRepository::new();
        let created = repo
            .create(NewEvent::finalize(spring_submission()))
            .await
            .unwrap();

        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(created));
        assert_eq!(repo.get_by_id(Uuid::now_v7()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryEventRepository::new();
        let view = repo.clone();

        repo.create(NewEvent::finalize(spring_submission()))
            .await
            .unwrap();

        assert_eq!(view.count().await.unwrap(), 1);
    }
}
