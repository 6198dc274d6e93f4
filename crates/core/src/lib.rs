//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{AggregateRoot, Entity};
pub use error::{DomainError, DomainResult};
pub use repository::Repository;
pub use value_object::ValueObject;
