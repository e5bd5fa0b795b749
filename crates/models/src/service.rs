use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// duration in minutes
    pub duration: i32,
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_price(price: Decimal) -> Result<(), errors::ModelError> {
    if price <= Decimal::ZERO {
        return Err(errors::ModelError::Validation("O preço deve ser maior que zero.".into()));
    }
    Ok(())
}

pub fn validate_duration(duration: i32) -> Result<(), errors::ModelError> {
    if duration <= 0 {
        return Err(errors::ModelError::Validation("A duração deve ser maior que zero.".into()));
    }
    Ok(())
}
