//! Domain error model.

use thiserror::Error;

/// Result type used across the reporting domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Which lookup table a dangling reference pointed into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReferenceKind {
    Seller,
    Product,
}

impl core::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReferenceKind::Seller => f.write_str("seller"),
            ReferenceKind::Product => f.write_str("product"),
        }
    }
}

/// Domain-level error.
///
/// Both variants are deterministic failures of a single report computation.
/// Callers halt the requested report and surface the message; nothing here is
/// retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input snapshot or a strategy result failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A purchase record points at a seller or sku missing from the lookups.
    ///
    /// This is a data-quality defect upstream, never skipped or coerced.
    #[error("unresolved {kind} reference: {id}")]
    UnresolvedReference { kind: ReferenceKind, id: String },
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn unresolved(kind: ReferenceKind, id: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            kind,
            id: id.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_unresolved_reference(&self) -> bool {
        matches!(self, Self::UnresolvedReference { .. })
    }
}
