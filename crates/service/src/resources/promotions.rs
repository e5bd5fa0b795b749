use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::promotion;

use crate::errors::ServiceError;
use crate::numeric::{decimal_from_f64, decimal_to_f64};
use crate::resource::{Messages, Resource, MSG_REQUIRED_FIELDS};
use crate::serde_util::double_option;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
    pub discount: Option<f64>,
    pub active: bool,
}

impl From<promotion::Model> for PromotionRecord {
    fn from(m: promotion::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            image_url: m.image_url,
            start_date: m.start_date,
            end_date: m.end_date,
            discount: m.discount.as_ref().map(decimal_to_f64),
            active: m.active,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionCreateInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub discount: Option<f64>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionUpdateInput {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "double_option")]
    pub discount: Option<Option<f64>>,
    pub active: Option<bool>,
}

pub struct Promotions;

#[async_trait]
impl Resource for Promotions {
    const NAME: &'static str = "promotions";
    const MESSAGES: Messages = Messages {
        create_failed: "Erro ao criar uma promoção.",
        fetch_failed: "Erro ao buscar uma promoção.",
        update_failed: "Erro ao editar uma promoção.",
        delete_failed: "Erro ao excluir uma promoção.",
        not_found: "Promoção não encontrada.",
    };

    type Record = PromotionRecord;
    type CreateInput = PromotionCreateInput;
    type UpdateInput = PromotionUpdateInput;

    async fn create(db: &DatabaseConnection, input: Self::CreateInput) -> Result<Self::Record, ServiceError> {
        let (Some(title), Some(description), Some(start_date), Some(end_date)) =
            (input.title, input.description, input.start_date, input.end_date)
        else {
            return Err(ServiceError::Validation(MSG_REQUIRED_FIELDS.into()));
        };
        // start/end are intentionally not cross-checked
        let discount = match input.discount {
            Some(v) => Some(decimal_from_f64(v, "discount")?),
            None => None,
        };

        let now = Utc::now().into();
        let am = promotion::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title),
            description: Set(description),
            image_url: Set(input.image_url),
            start_date: Set(start_date.into()),
            end_date: Set(end_date.into()),
            discount: Set(discount),
            active: Set(input.active.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let created = am.insert(db).await.map_err(ServiceError::db)?;
        Ok(created.into())
    }

    async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<Self::Record>, ServiceError> {
        let found = promotion::Entity::find_by_id(id).one(db).await.map_err(ServiceError::db)?;
        Ok(found.map(Into::into))
    }

    async fn list(db: &DatabaseConnection, _include_inactive: bool) -> Result<Vec<Self::Record>, ServiceError> {
        let rows = promotion::Entity::find().all(db).await.map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(db: &DatabaseConnection, id: Uuid, input: Self::UpdateInput) -> Result<Self::Record, ServiceError> {
        let found = promotion::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::NotFound(Self::MESSAGES.not_found.into()))?;

        let mut am: promotion::ActiveModel = found.into();
        if let Some(title) = input.title { am.title = Set(title); }
        if let Some(description) = input.description { am.description = Set(description); }
        if let Some(image_url) = input.image_url { am.image_url = Set(image_url); }
        if let Some(start_date) = input.start_date { am.start_date = Set(start_date.into()); }
        if let Some(end_date) = input.end_date { am.end_date = Set(end_date.into()); }
        if let Some(discount) = input.discount {
            let discount = match discount {
                Some(v) => Some(decimal_from_f64(v, "discount")?),
                None => None,
            };
            am.discount = Set(discount);
        }
        if let Some(active) = input.active { am.active = Set(active); }
        am.updated_at = Set(Utc::now().into());
        am.update(db).await.map_err(ServiceError::db)?;

        let refreshed = promotion::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::NotFound(Self::MESSAGES.not_found.into()))?;
        Ok(refreshed.into())
    }

    async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
        let res = promotion::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::TimeZone;

    #[tokio::test]
    async fn promotion_dates_and_discount_round_trip() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let start = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 8, 31, 23, 59, 59).unwrap();
        let created = Promotions::create(&db, PromotionCreateInput {
            title: Some("Semana do cliente".into()),
            description: Some("Descontos em todos os cortes".into()),
            start_date: Some(start),
            end_date: Some(end),
            discount: Some(15.0),
            ..Default::default()
        }).await?;
        assert_eq!(created.discount, Some(15.0));
        assert_eq!(created.start_date.with_timezone(&Utc), start);

        // Clearing the discount with an explicit null
        let patch: PromotionUpdateInput = serde_json::from_str(r#"{"discount": null}"#).unwrap();
        let updated = Promotions::update(&db, created.id, patch).await?;
        assert_eq!(updated.discount, None);
        assert_eq!(updated.title, "Semana do cliente");

        Promotions::delete(&db, created.id).await?;
        Ok(())
    }
}
