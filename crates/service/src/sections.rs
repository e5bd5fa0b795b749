//! Section-visibility store.
//!
//! One small reference table decides which marketing sections render. The
//! public page reads it once per load, so reads go through an in-process
//! cache; every write invalidates the snapshot.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use moka::future::Cache;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use models::section_visibility as section;

use crate::errors::ServiceError;

/// The five fixed sections of the public page.
pub const SECTION_NAMES: [&str; 5] = ["gallery", "products", "promotions", "services", "team"];

const CACHE_KEY: &str = "sections";
const CACHE_TTL: Duration = Duration::from_secs(30);

pub const MSG_SECTIONS_FETCH: &str = "Erro ao buscar as seções.";
pub const MSG_SECTIONS_SEED: &str = "Erro ao criar as seções.";
pub const MSG_SECTION_UPDATE: &str = "Erro ao editar uma seção.";
pub const MSG_SECTION_NOT_FOUND: &str = "Seção não encontrada.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub id: Uuid,
    pub name: String,
    pub active: bool,
}

impl From<section::Model> for SectionRecord {
    fn from(m: section::Model) -> Self {
        Self { id: m.id, name: m.name, active: m.active }
    }
}

#[derive(Clone)]
pub struct SectionStore {
    db: DatabaseConnection,
    cache: Cache<&'static str, Arc<Vec<SectionRecord>>>,
}

impl SectionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(CACHE_TTL)
            .build();
        Self { db, cache }
    }

    /// Name-ordered snapshot, served from cache when warm.
    pub async fn list(&self) -> Result<Vec<SectionRecord>, ServiceError> {
        if let Some(cached) = self.cache.get(&CACHE_KEY).await {
            return Ok(cached.as_ref().clone());
        }
        let rows = self.fetch().await?;
        self.cache.insert(CACHE_KEY, Arc::new(rows.clone())).await;
        Ok(rows)
    }

    async fn fetch(&self) -> Result<Vec<SectionRecord>, ServiceError> {
        let rows = section::Entity::find()
            .order_by_asc(section::Column::Name)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Uncached single-row lookup.
    pub async fn get(&self, id: Uuid) -> Result<Option<SectionRecord>, ServiceError> {
        let found = section::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(found.map(Into::into))
    }

    /// Insert any missing fixed rows. Existing rows keep their `active`
    /// value, so running the seed twice never resets a toggle.
    pub async fn seed(&self) -> Result<Vec<SectionRecord>, ServiceError> {
        for name in SECTION_NAMES {
            let existing = section::Entity::find()
                .filter(section::Column::Name.eq(name))
                .one(&self.db)
                .await
                .map_err(ServiceError::db)?;
            if existing.is_none() {
                let now = Utc::now().into();
                let am = section::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    name: Set(name.to_string()),
                    active: Set(true),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                am.insert(&self.db).await.map_err(ServiceError::db)?;
                info!(section = name, "seeded visibility section");
            }
        }
        self.cache.invalidate(&CACHE_KEY).await;
        self.list().await
    }

    /// Flip a single flag and return the re-fetched row.
    pub async fn set_active(&self, id: Uuid, active: bool) -> Result<SectionRecord, ServiceError> {
        let found = section::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::NotFound(MSG_SECTION_NOT_FOUND.into()))?;

        let mut am: section::ActiveModel = found.into();
        am.active = Set(active);
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&self.db).await.map_err(ServiceError::db)?;
        self.cache.invalidate(&CACHE_KEY).await;
        Ok(updated.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seed_is_idempotent_and_keeps_toggles() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let store = SectionStore::new(db);

        let sections = store.seed().await?;
        assert_eq!(sections.len(), SECTION_NAMES.len());
        // list comes back ordered by name
        let names: Vec<_> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, SECTION_NAMES);

        // Toggle one off, reseed, and confirm the toggle survives
        let gallery = sections.iter().find(|s| s.name == "gallery").unwrap().clone();
        let flipped = store.set_active(gallery.id, false).await?;
        assert!(!flipped.active);

        let reseeded = store.seed().await?;
        let gallery_after = reseeded.iter().find(|s| s.name == "gallery").unwrap();
        assert!(!gallery_after.active);

        // restore for other tests
        store.set_active(gallery.id, true).await?;
        Ok(())
    }

    #[tokio::test]
    async fn set_active_unknown_id_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let store = SectionStore::new(db);

        let err = store.set_active(Uuid::new_v4(), false).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
