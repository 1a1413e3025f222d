use async_trait::async_trait;

use crate::{
    domain::models::{
        EntryId, ExerciseKey, FreeformEntry, FreeformExercise, FreeformUpdate, TwoFlagsEntry,
        TwoFlagsUpdate, UserId,
    },
    repositories::RepositoryError,
};

/// Storage for journal entries, scoped by owner and exercise.
///
/// Listing methods return entries newest first. Updates on a missing entry
/// fail with [`RepositoryError::NotFound`]; deletes of a missing entry
/// succeed.
#[async_trait]
pub trait EntryRepository: Send + Sync + 'static {
    async fn insert_two_flags(
        &self,
        user_id: &UserId,
        entry: &TwoFlagsEntry,
    ) -> Result<(), RepositoryError>;

    async fn insert_freeform(
        &self,
        user_id: &UserId,
        exercise: FreeformExercise,
        entry: &FreeformEntry,
    ) -> Result<(), RepositoryError>;

    async fn update_two_flags(
        &self,
        user_id: &UserId,
        id: &EntryId,
        update: &TwoFlagsUpdate,
    ) -> Result<(), RepositoryError>;

    async fn update_freeform(
        &self,
        user_id: &UserId,
        exercise: FreeformExercise,
        id: &EntryId,
        update: &FreeformUpdate,
    ) -> Result<(), RepositoryError>;

    async fn delete(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
        id: &EntryId,
    ) -> Result<(), RepositoryError>;

    async fn list_two_flags(&self, user_id: &UserId) -> Result<Vec<TwoFlagsEntry>, RepositoryError>;

    async fn list_freeform(
        &self,
        user_id: &UserId,
        exercise: FreeformExercise,
    ) -> Result<Vec<FreeformEntry>, RepositoryError>;
}
