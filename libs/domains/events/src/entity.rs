use crate::models::{Event, EventStatus, NewEvent};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Sea-ORM entity for the `events` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub begin_enrollment_date_time: DateTime,
    pub close_enrollment_date_time: DateTime,
    pub begin_event_date_time: DateTime,
    pub close_event_date_time: DateTime,
    pub base_price: i32,
    pub max_price: i32,
    pub limit_of_enrollment: i32,
    pub location: Option<String>,
    pub free: bool,
    pub offline: bool,
    pub event_status: EventStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            begin_enrollment_date_time: model.begin_enrollment_date_time,
            close_enrollment_date_time: model.close_enrollment_date_time,
            begin_event_date_time: model.begin_event_date_time,
            close_event_date_time: model.close_event_date_time,
            base_price: model.base_price,
            max_price: model.max_price,
            limit_of_enrollment: model.limit_of_enrollment,
            location: model.location,
            free: model.free,
            offline: model.offline,
            event_status: model.event_status,
        }
    }
}

/// The primary key is generated here (UUIDv7), never taken from the caller.
impl From<NewEvent> for ActiveModel {
    fn from(event: NewEvent) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(event.name),
            description: Set(event.description),
            begin_enrollment_date_time: Set(event.begin_enrollment_date_time),
            close_enrollment_date_time: Set(event.close_enrollment_date_time),
            begin_event_date_time: Set(event.begin_event_date_time),
            close_event_date_time: Set(event.close_event_date_time),
            base_price: Set(event.base_price),
            max_price: Set(event.max_price),
            limit_of_enrollment: Set(event.limit_of_enrollment),
            location: Set(event.location),
            free: Set(event.free),
            offline: Set(event.offline),
            event_status: Set(event.event_status),
        }
    }
}
