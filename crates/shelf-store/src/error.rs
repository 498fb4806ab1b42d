//! Store error types for shelf-store.

use shelf_core::errors::CoreError;
use thiserror::Error;

/// Errors from category store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No category has the requested ID.
    #[error("Category not found: {id}")]
    NotFound { id: String },

    /// Could not find an unused ID.
    #[error("Failed to allocate a unique category id after {attempts} attempts")]
    IdExhausted { attempts: u32 },

    /// Validation or ID generation failure from shelf-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Core(CoreError::Validation(_)))
    }
}
