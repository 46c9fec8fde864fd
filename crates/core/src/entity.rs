//! Entity trait: identity across the joined datasets.

use std::collections::HashMap;

use crate::error::{DomainError, DomainResult};

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Build an id → position lookup over a borrowed collection.
///
/// Positions index back into `entities` (or into any arena built in the same
/// order). Duplicate identifiers are rejected: a join against an ambiguous key
/// would attribute records to whichever entry happened to win.
pub fn index_by_id<'a, E: Entity>(
    entities: &'a [E],
    label: &str,
) -> DomainResult<HashMap<&'a E::Id, usize>> {
    let mut index = HashMap::with_capacity(entities.len());
    for (position, entity) in entities.iter().enumerate() {
        if index.insert(entity.id(), position).is_some() {
            return Err(DomainError::invalid_input(format!(
                "duplicate {label} id: {}",
                entity.id()
            )));
        }
    }
    Ok(index)
}
