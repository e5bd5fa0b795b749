use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::gallery_image;

use crate::errors::ServiceError;
use crate::resource::{Messages, Resource, MSG_REQUIRED_FIELDS};
use crate::serde_util::double_option;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageRecord {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub featured: bool,
    pub active: bool,
}

impl From<gallery_image::Model> for GalleryImageRecord {
    fn from(m: gallery_image::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            image_url: m.image_url,
            featured: m.featured,
            active: m.active,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageCreateInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageUpdateInput {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
}

pub struct Gallery;

#[async_trait]
impl Resource for Gallery {
    const NAME: &'static str = "gallery";
    const MESSAGES: Messages = Messages {
        create_failed: "Erro ao criar uma galeria.",
        fetch_failed: "Erro ao buscar uma galeria.",
        update_failed: "Erro ao editar uma galeria.",
        delete_failed: "Erro ao excluir uma galeria.",
        not_found: "Imagem não encontrada.",
    };

    type Record = GalleryImageRecord;
    type CreateInput = GalleryImageCreateInput;
    type UpdateInput = GalleryImageUpdateInput;

    async fn create(db: &DatabaseConnection, input: Self::CreateInput) -> Result<Self::Record, ServiceError> {
        let (Some(title), Some(image_url)) = (input.title, input.image_url) else {
            return Err(ServiceError::Validation(MSG_REQUIRED_FIELDS.into()));
        };

        let now = Utc::now().into();
        let am = gallery_image::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title),
            description: Set(input.description),
            image_url: Set(image_url),
            featured: Set(input.featured.unwrap_or(false)),
            active: Set(input.active.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let created = am.insert(db).await.map_err(ServiceError::db)?;
        Ok(created.into())
    }

    async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<Self::Record>, ServiceError> {
        let found = gallery_image::Entity::find_by_id(id).one(db).await.map_err(ServiceError::db)?;
        Ok(found.map(Into::into))
    }

    async fn list(db: &DatabaseConnection, _include_inactive: bool) -> Result<Vec<Self::Record>, ServiceError> {
        let rows = gallery_image::Entity::find().all(db).await.map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(db: &DatabaseConnection, id: Uuid, input: Self::UpdateInput) -> Result<Self::Record, ServiceError> {
        let found = gallery_image::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::NotFound(Self::MESSAGES.not_found.into()))?;

        let mut am: gallery_image::ActiveModel = found.into();
        if let Some(title) = input.title { am.title = Set(title); }
        if let Some(description) = input.description { am.description = Set(description); }
        if let Some(image_url) = input.image_url { am.image_url = Set(image_url); }
        if let Some(featured) = input.featured { am.featured = Set(featured); }
        if let Some(active) = input.active { am.active = Set(active); }
        am.updated_at = Set(Utc::now().into());
        am.update(db).await.map_err(ServiceError::db)?;

        let refreshed = gallery_image::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::NotFound(Self::MESSAGES.not_found.into()))?;
        Ok(refreshed.into())
    }

    async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
        let res = gallery_image::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}
