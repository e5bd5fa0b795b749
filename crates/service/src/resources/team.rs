use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::team_member;

use crate::errors::ServiceError;
use crate::resource::{Messages, Resource, MSG_REQUIRED_FIELDS};
use crate::serde_util::double_option;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberRecord {
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub image_url: String,
    pub active: bool,
}

impl From<team_member::Model> for TeamMemberRecord {
    fn from(m: team_member::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            bio: m.bio,
            instagram: m.instagram,
            facebook: m.facebook,
            linkedin: m.linkedin,
            image_url: m.image_url,
            active: m.active,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberCreateInput {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub image_url: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberUpdateInput {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub instagram: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub facebook: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub linkedin: Option<Option<String>>,
    pub image_url: Option<String>,
    pub active: Option<bool>,
}

pub struct Team;

#[async_trait]
impl Resource for Team {
    const NAME: &'static str = "team";
    const MESSAGES: Messages = Messages {
        create_failed: "Erro ao criar um membro da equipe.",
        fetch_failed: "Erro ao buscar um membro da equipe.",
        update_failed: "Erro ao editar um membro da equipe.",
        delete_failed: "Erro ao excluir um membro da equipe.",
        not_found: "Membro da equipe não encontrado.",
    };

    type Record = TeamMemberRecord;
    type CreateInput = TeamMemberCreateInput;
    type UpdateInput = TeamMemberUpdateInput;

    async fn create(db: &DatabaseConnection, input: Self::CreateInput) -> Result<Self::Record, ServiceError> {
        let (Some(name), Some(image_url)) = (input.name, input.image_url) else {
            return Err(ServiceError::Validation(MSG_REQUIRED_FIELDS.into()));
        };

        let now = Utc::now().into();
        let am = team_member::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            bio: Set(input.bio),
            instagram: Set(input.instagram),
            facebook: Set(input.facebook),
            linkedin: Set(input.linkedin),
            image_url: Set(image_url),
            active: Set(input.active.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let created = am.insert(db).await.map_err(ServiceError::db)?;
        Ok(created.into())
    }

    async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<Self::Record>, ServiceError> {
        let found = team_member::Entity::find_by_id(id).one(db).await.map_err(ServiceError::db)?;
        Ok(found.map(Into::into))
    }

    async fn list(db: &DatabaseConnection, _include_inactive: bool) -> Result<Vec<Self::Record>, ServiceError> {
        let rows = team_member::Entity::find().all(db).await.map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(db: &DatabaseConnection, id: Uuid, input: Self::UpdateInput) -> Result<Self::Record, ServiceError> {
        let found = team_member::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::NotFound(Self::MESSAGES.not_found.into()))?;

        let mut am: team_member::ActiveModel = found.into();
        if let Some(name) = input.name { am.name = Set(name); }
        if let Some(bio) = input.bio { am.bio = Set(bio); }
        if let Some(instagram) = input.instagram { am.instagram = Set(instagram); }
        if let Some(facebook) = input.facebook { am.facebook = Set(facebook); }
        if let Some(linkedin) = input.linkedin { am.linkedin = Set(linkedin); }
        if let Some(image_url) = input.image_url { am.image_url = Set(image_url); }
        if let Some(active) = input.active { am.active = Set(active); }
        am.updated_at = Set(Utc::now().into());
        am.update(db).await.map_err(ServiceError::db)?;

        let refreshed = team_member::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::NotFound(Self::MESSAGES.not_found.into()))?;
        Ok(refreshed.into())
    }

    async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
        let res = team_member::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn social_links_are_optional_and_clearable() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let created = Team::create(&db, TeamMemberCreateInput {
            name: Some("João".into()),
            image_url: Some("https://utfs.io/f/joao".into()),
            instagram: Some("@joao".into()),
            ..Default::default()
        }).await?;
        assert_eq!(created.instagram.as_deref(), Some("@joao"));
        assert!(created.facebook.is_none());

        let patch: TeamMemberUpdateInput = serde_json::from_str(r#"{"instagram": null}"#).unwrap();
        let updated = Team::update(&db, created.id, patch).await?;
        assert!(updated.instagram.is_none());
        assert_eq!(updated.name, "João");

        Team::delete(&db, created.id).await?;
        Ok(())
    }
}
