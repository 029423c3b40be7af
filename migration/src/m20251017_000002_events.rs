use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_users::Users;

static IDX_EVENTS_DATE: &str = "idx-events-date";
static FK_EVENTS_USER_ID: &str = "fk-events-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(text(Events::Title))
                    .col(text(Events::Description))
                    .col(timestamp_with_time_zone(Events::Date))
                    .col(text(Events::Location))
                    .col(text_null(Events::ImageUrl))
                    .col(uuid_null(Events::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENTS_USER_ID)
                            .from(Events::Table, Events::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENTS_DATE)
                    .table(Events::Table)
                    .col(Events::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    Id,
    Title,
    Description,
    Date,
    Location,
    ImageUrl,
    UserId,
}
