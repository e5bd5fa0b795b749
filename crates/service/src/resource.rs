//! Uniform CRUD contract for the site's content entities.
//!
//! Every dashboard screen speaks the same verbs over `/api/<entity>`; the
//! trait keeps one implementation of the HTTP plumbing while each entity
//! supplies its own projection, inputs and messages.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Shared 400 message for missing required fields, as the dashboard shows it.
pub const MSG_REQUIRED_FIELDS: &str = "Todos os campos são obrigatórios.";

/// Localized per-operation messages surfaced to API clients on failure.
pub struct Messages {
    pub create_failed: &'static str,
    pub fetch_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub not_found: &'static str,
}

#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Route segment under `/api`.
    const NAME: &'static str;
    const MESSAGES: Messages;

    /// Wire projection; internal timestamps stay out of it.
    type Record: Serialize + Send + Sync;
    type CreateInput: DeserializeOwned + Send + Sync + 'static;
    type UpdateInput: DeserializeOwned + Send + Sync + 'static;

    async fn create(db: &DatabaseConnection, input: Self::CreateInput) -> Result<Self::Record, ServiceError>;

    async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<Self::Record>, ServiceError>;

    /// `include_inactive` is driven by the dashboard's `?showAll=true`;
    /// entities whose public page shows every row ignore it.
    async fn list(db: &DatabaseConnection, include_inactive: bool) -> Result<Vec<Self::Record>, ServiceError>;

    /// Applies only the fields present in the payload, then re-fetches and
    /// returns the full row.
    async fn update(db: &DatabaseConnection, id: Uuid, input: Self::UpdateInput) -> Result<Self::Record, ServiceError>;

    /// Returns `false` when the row was already gone.
    async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError>;
}
