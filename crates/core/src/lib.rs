//! `salesperf-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the input model and
//! the reporting engine (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::{Entity, index_by_id};
pub use error::{DomainError, DomainResult, ReferenceKind};
pub use id::{SellerId, Sku};
pub use money::{round_money, share_of};
