//! Create `promotion` table.
//!
//! No start<end constraint; the dashboard may stage promotions freely.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Promotion::Table)
                    .if_not_exists()
                    .col(uuid(Promotion::Id).primary_key())
                    .col(string_len(Promotion::Title, 128).not_null())
                    .col(text(Promotion::Description).not_null())
                    .col(text_null(Promotion::ImageUrl))
                    .col(timestamp_with_time_zone(Promotion::StartDate).not_null())
                    .col(timestamp_with_time_zone(Promotion::EndDate).not_null())
                    .col(decimal_len_null(Promotion::Discount, 10, 2))
                    .col(boolean(Promotion::Active).not_null().default(true))
                    .col(timestamp_with_time_zone(Promotion::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Promotion::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Promotion::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Promotion { Table, Id, Title, Description, ImageUrl, StartDate, EndDate, Discount, Active, CreatedAt, UpdatedAt }
