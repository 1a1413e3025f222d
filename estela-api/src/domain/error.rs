use thiserror::Error;

use crate::{
    domain::models::{EntryId, ExerciseKey},
    repositories::RepositoryError,
};

/// Errors that can occur during entry store operations.
#[derive(Debug, Error)]
pub enum EntryStoreError {
    #[error("entry not found: {0}")]
    NotFound(EntryId),
    #[error("update does not apply to {0} entries")]
    MismatchedUpdate(ExerciseKey),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
