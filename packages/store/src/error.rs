use crate::models::{EntityKind, ObjectId};

/// Errors reported by an [`crate::ObjectStore`] backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached or the operation failed inside it.
    #[error("store error: {0}")]
    Backend(String),
    /// A referenced record does not exist in the store.
    #[error("no {kind} record with id {id}")]
    MissingRecord { kind: EntityKind, id: ObjectId },
}

/// Errors from the high-level catalog flows.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// The ISBD uniqueness probe found an existing record with the same value.
    #[error("there is already an ISBD record with the value {0:?}")]
    DuplicateIsbd(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
