use async_trait::async_trait;

use crate::domain::{
    models::{EntryId, EntryUpdate, ExerciseEntries, ExerciseKey, FreeformExercise, UserId},
    services::EntrySubscription,
    EntryStoreError,
};

#[async_trait]
pub trait EntryService: Send + Sync + 'static {
    /// Creates an empty two-flags entry stamped with the current time.
    async fn create_two_flags_entry(&self, user_id: &UserId) -> Result<EntryId, EntryStoreError>;

    /// Creates an empty freeform entry stamped with the current time.
    async fn create_freeform_entry(
        &self,
        user_id: &UserId,
        exercise: FreeformExercise,
    ) -> Result<EntryId, EntryStoreError>;

    async fn create_entry(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
    ) -> Result<EntryId, EntryStoreError> {
        match exercise.freeform() {
            Some(freeform) => self.create_freeform_entry(user_id, freeform).await,
            None => self.create_two_flags_entry(user_id).await,
        }
    }

    async fn update_entry(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
        id: &EntryId,
        update: EntryUpdate,
    ) -> Result<(), EntryStoreError>;

    async fn delete_entry(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
        id: &EntryId,
    ) -> Result<(), EntryStoreError>;

    async fn list_entries(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
    ) -> Result<ExerciseEntries, EntryStoreError>;

    /// Live view of one collection; the first poll yields the current list.
    async fn subscribe_entries(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
    ) -> Result<EntrySubscription, EntryStoreError>;
}
