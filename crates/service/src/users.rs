//! Dashboard account management. Password changes are re-hashed through the
//! auth layer; raw passwords never reach the database.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::{user, user_credentials};

use crate::auth::service::hash_password;
use crate::errors::ServiceError;

pub const MSG_USERS_FETCH: &str = "Erro ao buscar usuários.";
pub const MSG_USER_UPDATE: &str = "Erro ao editar usuário.";
pub const MSG_USER_DELETE: &str = "Erro ao excluir usuário.";
pub const MSG_USER_NOT_FOUND: &str = "Usuário não encontrado.";

/// Wire projection of an account; the password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<user::Model> for UserRecord {
    fn from(m: user::Model) -> Self {
        Self { id: m.id, name: m.name, email: m.email }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UserUpdateInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<UserRecord>, ServiceError> {
    let rows = user::Entity::find()
        .order_by_asc(user::Column::Name)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Partial update; only the fields present in the payload are written.
pub async fn update_user(db: &DatabaseConnection, id: Uuid, input: UserUpdateInput) -> Result<UserRecord, ServiceError> {
    let found = user::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ServiceError::db)?
        .ok_or_else(|| ServiceError::NotFound(MSG_USER_NOT_FOUND.into()))?;

    let mut am: user::ActiveModel = found.into();
    if let Some(name) = input.name {
        user::validate_name(&name)?;
        am.name = Set(name);
    }
    if let Some(email) = input.email {
        user::validate_email(&email)?;
        am.email = Set(email);
    }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(ServiceError::db)?;

    if let Some(password) = input.password {
        let hash = hash_password(&password)
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        user_credentials::upsert_password(db, updated.id, hash, "argon2").await?;
    }

    Ok(updated.into())
}

pub async fn delete_user(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = user::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::{ColumnTrait, QueryFilter};

    #[tokio::test]
    async fn user_update_rehashes_password() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let email = format!("dash_{}@example.com", Uuid::new_v4());
        let created = user::create(&db, &email, "Dash User").await?;

        let updated = update_user(&db, created.id, UserUpdateInput {
            name: Some("Renamed".into()),
            password: Some("NovaSenha123".into()),
            ..Default::default()
        }).await?;
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.email, email);

        // The stored credential is an argon2 hash, not the raw password
        let cred = user_credentials::Entity::find()
            .filter(user_credentials::Column::UserId.eq(created.id))
            .one(&db)
            .await?
            .unwrap();
        assert_ne!(cred.password_hash, "NovaSenha123");
        assert!(cred.password_hash.starts_with("$argon2"));

        assert!(delete_user(&db, created.id).await?);
        assert!(!delete_user(&db, created.id).await?);
        Ok(())
    }
}
