//! Create `section_visibility` table.
//!
//! Named boolean flags deciding which marketing sections render; seeded at
//! runtime with five fixed names.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SectionVisibility::Table)
                    .if_not_exists()
                    .col(uuid(SectionVisibility::Id).primary_key())
                    .col(string_len(SectionVisibility::Name, 64).unique_key().not_null())
                    .col(boolean(SectionVisibility::Active).not_null().default(true))
                    .col(timestamp_with_time_zone(SectionVisibility::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(SectionVisibility::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SectionVisibility::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SectionVisibility { Table, Id, Name, Active, CreatedAt, UpdatedAt }
