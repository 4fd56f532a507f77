//! `evently-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, find_index};
pub use error::{DomainError, DomainResult, require_fields};
pub use id::{EventId, UserId};
