use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::service;

use crate::errors::ServiceError;
use crate::numeric::{decimal_from_f64, decimal_to_f64};
use crate::resource::{Messages, Resource, MSG_REQUIRED_FIELDS};
use crate::serde_util::double_option;

/// Wire projection of a service; the decimal price crosses as a JSON number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: i32,
    pub image_url: Option<String>,
    pub active: bool,
}

impl From<service::Model> for ServiceRecord {
    fn from(m: service::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: decimal_to_f64(&m.price),
            duration: m.duration,
            image_url: m.image_url,
            active: m.active,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCreateInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
    pub image_url: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUpdateInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    pub active: Option<bool>,
}

pub struct Services;

#[async_trait]
impl Resource for Services {
    const NAME: &'static str = "services";
    const MESSAGES: Messages = Messages {
        create_failed: "Erro ao criar um serviço.",
        fetch_failed: "Erro ao buscar um serviço.",
        update_failed: "Erro ao editar um serviço.",
        delete_failed: "Erro ao excluir um serviço.",
        not_found: "Serviço não encontrado.",
    };

    type Record = ServiceRecord;
    type CreateInput = ServiceCreateInput;
    type UpdateInput = ServiceUpdateInput;

    async fn create(db: &DatabaseConnection, input: Self::CreateInput) -> Result<Self::Record, ServiceError> {
        let (Some(name), Some(description), Some(price), Some(duration)) =
            (input.name, input.description, input.price, input.duration)
        else {
            return Err(ServiceError::Validation(MSG_REQUIRED_FIELDS.into()));
        };
        let price = decimal_from_f64(price, "price")?;
        service::validate_price(price)?;
        service::validate_duration(duration)?;

        let now = Utc::now().into();
        let am = service::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            description: Set(description),
            price: Set(price),
            duration: Set(duration),
            image_url: Set(input.image_url),
            active: Set(input.active.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let created = am.insert(db).await.map_err(ServiceError::db)?;
        Ok(created.into())
    }

    async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<Self::Record>, ServiceError> {
        let found = service::Entity::find_by_id(id).one(db).await.map_err(ServiceError::db)?;
        Ok(found.map(Into::into))
    }

    // The public page renders every service and greys out inactive ones,
    // so the flag is a no-op here.
    async fn list(db: &DatabaseConnection, _include_inactive: bool) -> Result<Vec<Self::Record>, ServiceError> {
        let rows = service::Entity::find().all(db).await.map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(db: &DatabaseConnection, id: Uuid, input: Self::UpdateInput) -> Result<Self::Record, ServiceError> {
        let found = service::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::NotFound(Self::MESSAGES.not_found.into()))?;

        let mut am: service::ActiveModel = found.into();
        if let Some(name) = input.name { am.name = Set(name); }
        if let Some(description) = input.description { am.description = Set(description); }
        if let Some(price) = input.price {
            let price = decimal_from_f64(price, "price")?;
            service::validate_price(price)?;
            am.price = Set(price);
        }
        if let Some(duration) = input.duration {
            service::validate_duration(duration)?;
            am.duration = Set(duration);
        }
        if let Some(image_url) = input.image_url { am.image_url = Set(image_url); }
        if let Some(active) = input.active { am.active = Set(active); }
        am.updated_at = Set(Utc::now().into());
        am.update(db).await.map_err(ServiceError::db)?;

        // Return the freshly fetched row; the dashboard expects the full record
        let refreshed = service::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::NotFound(Self::MESSAGES.not_found.into()))?;
        Ok(refreshed.into())
    }

    async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
        let res = service::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn service_crud_round_trip() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let created = Services::create(&db, ServiceCreateInput {
            name: Some("Corte".into()),
            description: Some("Corte simples".into()),
            price: Some(30.0),
            duration: Some(30),
            ..Default::default()
        }).await?;
        assert_eq!(created.price, 30.0);
        assert!(created.active);

        let fetched = Services::get(&db, created.id).await?.unwrap();
        assert_eq!(fetched.name, "Corte");
        assert_eq!(fetched.duration, 30);

        // Partial update: only `active` is present, everything else stays
        let updated = Services::update(&db, created.id, ServiceUpdateInput {
            active: Some(false),
            ..Default::default()
        }).await?;
        assert!(!updated.active);
        assert_eq!(updated.name, "Corte");
        assert_eq!(updated.price, 30.0);

        assert!(Services::delete(&db, created.id).await?);
        assert!(Services::get(&db, created.id).await?.is_none());
        assert!(!Services::delete(&db, created.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn create_requires_all_fields() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let err = Services::create(&db, ServiceCreateInput {
            name: Some("Corte".into()),
            description: Some("Corte simples".into()),
            duration: Some(30),
            ..Default::default()
        }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let err = Services::update(&db, Uuid::new_v4(), ServiceUpdateInput::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
