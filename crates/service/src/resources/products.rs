use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::product;

use crate::errors::ServiceError;
use crate::numeric::{decimal_from_f64, decimal_to_f64};
use crate::resource::{Messages, Resource, MSG_REQUIRED_FIELDS};
use crate::serde_util::double_option;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub active: bool,
}

impl From<product::Model> for ProductRecord {
    fn from(m: product::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price.as_ref().map(decimal_to_f64),
            image_url: m.image_url,
            active: m.active,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateInput {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    pub active: Option<bool>,
}

pub struct Products;

#[async_trait]
impl Resource for Products {
    const NAME: &'static str = "products";
    const MESSAGES: Messages = Messages {
        create_failed: "Erro ao criar um produto.",
        fetch_failed: "Erro ao buscar um produto.",
        update_failed: "Erro ao editar um produto.",
        delete_failed: "Erro ao excluir um produto.",
        not_found: "Produto não encontrado.",
    };

    type Record = ProductRecord;
    type CreateInput = ProductCreateInput;
    type UpdateInput = ProductUpdateInput;

    async fn create(db: &DatabaseConnection, input: Self::CreateInput) -> Result<Self::Record, ServiceError> {
        let (Some(name), Some(price)) = (input.name, input.price) else {
            return Err(ServiceError::Validation(MSG_REQUIRED_FIELDS.into()));
        };
        let price = decimal_from_f64(price, "price")?;
        product::validate_price(price)?;

        let now = Utc::now().into();
        let am = product::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            description: Set(input.description),
            price: Set(Some(price)),
            image_url: Set(input.image_url),
            active: Set(input.active.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let created = am.insert(db).await.map_err(ServiceError::db)?;
        Ok(created.into())
    }

    async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<Self::Record>, ServiceError> {
        let found = product::Entity::find_by_id(id).one(db).await.map_err(ServiceError::db)?;
        Ok(found.map(Into::into))
    }

    /// Public shop page shows active products only; the dashboard passes
    /// `showAll=true` to see the rest.
    async fn list(db: &DatabaseConnection, include_inactive: bool) -> Result<Vec<Self::Record>, ServiceError> {
        let mut query = product::Entity::find();
        if !include_inactive {
            query = query.filter(product::Column::Active.eq(true));
        }
        let rows = query.all(db).await.map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(db: &DatabaseConnection, id: Uuid, input: Self::UpdateInput) -> Result<Self::Record, ServiceError> {
        let found = product::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::NotFound(Self::MESSAGES.not_found.into()))?;

        let mut am: product::ActiveModel = found.into();
        if let Some(name) = input.name { am.name = Set(name); }
        if let Some(description) = input.description { am.description = Set(description); }
        if let Some(price) = input.price {
            let price = match price {
                Some(v) => {
                    let d = decimal_from_f64(v, "price")?;
                    product::validate_price(d)?;
                    Some(d)
                }
                None => None,
            };
            am.price = Set(price);
        }
        if let Some(image_url) = input.image_url { am.image_url = Set(image_url); }
        if let Some(active) = input.active { am.active = Set(active); }
        am.updated_at = Set(Utc::now().into());
        am.update(db).await.map_err(ServiceError::db)?;

        let refreshed = product::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::NotFound(Self::MESSAGES.not_found.into()))?;
        Ok(refreshed.into())
    }

    async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
        let res = product::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}
