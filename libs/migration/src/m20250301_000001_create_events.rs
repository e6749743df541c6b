use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

fn event_statuses() -> [EventStatus; 5] {
    [
        EventStatus::Draft,
        EventStatus::Published,
        EventStatus::EndedEnrollment,
        EventStatus::BeganEvent,
        EventStatus::Ended,
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(EventStatus::Enum)
                    .values(event_statuses())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_uuid(Events::Id))
                    .col(string(Events::Name))
                    .col(text(Events::Description).default(""))
                    .col(timestamp(Events::BeginEnrollmentDateTime))
                    .col(timestamp(Events::CloseEnrollmentDateTime))
                    .col(timestamp(Events::BeginEventDateTime))
                    .col(timestamp(Events::CloseEventDateTime))
                    .col(integer(Events::BasePrice))
                    .col(integer(Events::MaxPrice))
                    .col(integer(Events::LimitOfEnrollment))
                    .col(string_null(Events::Location))
                    .col(boolean(Events::Free))
                    .col(boolean(Events::Offline))
                    .col(
                        ColumnDef::new(Events::EventStatus)
                            .enumeration(EventStatus::Enum, event_statuses())
                            .not_null()
                            .default("DRAFT"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_event_status")
                    .table(Events::Table)
                    .col(Events::EventStatus)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(EventStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Name,
    Description,
    BeginEnrollmentDateTime,
    CloseEnrollmentDateTime,
    BeginEventDateTime,
    CloseEventDateTime,
    BasePrice,
    MaxPrice,
    LimitOfEnrollment,
    Location,
    Free,
    Offline,
    EventStatus,
}

#[derive(DeriveIden)]
enum EventStatus {
    #[sea_orm(iden = "event_status")]
    Enum,
    #[sea_orm(iden = "DRAFT")]
    Draft,
    #[sea_orm(iden = "PUBLISHED")]
    Published,
    #[sea_orm(iden = "ENDED_ENROLLMENT")]
    EndedEnrollment,
    #[sea_orm(iden = "BEGAN_EVENT")]
    BeganEvent,
    #[sea_orm(iden = "ENDED")]
    Ended,
}
