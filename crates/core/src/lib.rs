//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no file or text-format concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ItemName;
pub use value_object::ValueObject;
