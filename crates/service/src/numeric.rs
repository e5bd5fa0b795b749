//! Decimal <-> JSON number adapters.
//!
//! Money-like columns are stored as fixed-point decimals but cross the wire
//! as plain JSON numbers; all conversion happens here, not in handlers.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::errors::ServiceError;

pub fn decimal_from_f64(value: f64, field: &'static str) -> Result<Decimal, ServiceError> {
    Decimal::from_f64(value)
        .ok_or_else(|| ServiceError::Validation(format!("Valor numérico inválido para {field}.")))
}

pub fn decimal_to_f64(value: &Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
