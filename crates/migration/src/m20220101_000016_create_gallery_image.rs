//! Create `gallery_image` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GalleryImage::Table)
                    .if_not_exists()
                    .col(uuid(GalleryImage::Id).primary_key())
                    .col(string_len(GalleryImage::Title, 128).not_null())
                    .col(text_null(GalleryImage::Description))
                    .col(text(GalleryImage::ImageUrl).not_null())
                    .col(boolean(GalleryImage::Featured).not_null().default(false))
                    .col(boolean(GalleryImage::Active).not_null().default(true))
                    .col(timestamp_with_time_zone(GalleryImage::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(GalleryImage::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(GalleryImage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum GalleryImage { Table, Id, Title, Description, ImageUrl, Featured, Active, CreatedAt, UpdatedAt }
