use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait};
use uuid::Uuid;

use crate::{
    entity,
    error::EventResult,
    models::{Event, NewEvent},
    repository::EventRepository,
};

/// PostgreSQL-backed [`EventRepository`]
#[derive(Clone)]
pub struct PgEventRepository {
    db: DatabaseConnection,
}

impl PgEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, event: NewEvent) -> EventResult<Event> {
        let active_model: entity::ActiveModel = event.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(event_id = %model.id, "Created event");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> EventResult<Option<Event>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn count(&self) -> EventResult<u64> {
        Ok(entity::Entity::find().count(&self.db).await?)
    }
}
