use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Credentials: index on user_id
        manager
            .create_index(
                Index::create()
                    .name("idx_user_credentials_user")
                    .table(UserCredentials::Table)
                    .col(UserCredentials::UserId)
                    .to_owned(),
            )
            .await?;

        // Public listings filter on active
        manager
            .create_index(
                Index::create()
                    .name("idx_product_active")
                    .table(Product::Table)
                    .col(Product::Active)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_service_active")
                    .table(Service::Table)
                    .col(Service::Active)
                    .to_owned(),
            )
            .await?;

        // Sections are listed ordered by name
        manager
            .create_index(
                Index::create()
                    .name("idx_section_visibility_name")
                    .table(SectionVisibility::Table)
                    .col(SectionVisibility::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_credentials_user").table(UserCredentials::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_active").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_active").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_section_visibility_name").table(SectionVisibility::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserCredentials { Table, UserId }

#[derive(DeriveIden)]
enum Product { Table, Active }

#[derive(DeriveIden)]
enum Service { Table, Active }

#[derive(DeriveIden)]
enum SectionVisibility { Table, Name }
