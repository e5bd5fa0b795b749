//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000011_create_user;
mod m20220101_000012_create_user_credentials;
mod m20220101_000013_create_service;
mod m20220101_000014_create_product;
mod m20220101_000015_create_promotion;
mod m20220101_000016_create_gallery_image;
mod m20220101_000017_create_team_member;
mod m20220101_000018_create_section_visibility;
mod m20220101_000002_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000011_create_user::Migration),
            Box::new(m20220101_000012_create_user_credentials::Migration),
            Box::new(m20220101_000013_create_service::Migration),
            Box::new(m20220101_000014_create_product::Migration),
            Box::new(m20220101_000015_create_promotion::Migration),
            Box::new(m20220101_000016_create_gallery_image::Migration),
            Box::new(m20220101_000017_create_team_member::Migration),
            Box::new(m20220101_000018_create_section_visibility::Migration),
            // Indexes should always be applied last
            Box::new(m20220101_000002_add_indexes::Migration),
        ]
    }
}
