//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod resource;
pub mod resources;
pub mod sections;
pub mod users;
pub mod auth;
pub mod upload;
pub mod numeric;
pub mod serde_util;
#[cfg(test)]
pub mod test_support;
