//! Create `team_member` table.
//!
//! Social links are optional free-form URLs.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(uuid(TeamMember::Id).primary_key())
                    .col(string_len(TeamMember::Name, 128).not_null())
                    .col(text_null(TeamMember::Bio))
                    .col(text_null(TeamMember::Instagram))
                    .col(text_null(TeamMember::Facebook))
                    .col(text_null(TeamMember::Linkedin))
                    .col(text(TeamMember::ImageUrl).not_null())
                    .col(boolean(TeamMember::Active).not_null().default(true))
                    .col(timestamp_with_time_zone(TeamMember::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(TeamMember::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TeamMember::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TeamMember { Table, Id, Name, Bio, Instagram, Facebook, Linkedin, ImageUrl, Active, CreatedAt, UpdatedAt }
