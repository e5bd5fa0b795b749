//! `Resource` implementations, one per content entity.

pub mod services;
pub mod products;
pub mod promotions;
pub mod gallery;
pub mod team;
