use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::instrument;

use crate::{
    domain::{
        models::{
            sort_newest_first, EntryId, EntryUpdate, ExerciseEntries, ExerciseKey, FreeformEntry,
            FreeformExercise, TwoFlagsEntry, UserId,
        },
        ports::{inbound::EntryService, outbound::EntryRepository},
        EntryStoreError,
    },
    repositories::RepositoryError,
};

use super::snapshots::{EntrySubscription, SnapshotHub};

/// Entry store: repository writes plus live snapshot fan-out.
///
/// Subscribers only ever see committed state. After each successful write
/// the affected collection is re-read and pushed to its channel.
pub struct EntryServiceImpl<R> {
    repository: Arc<R>,
    hub: SnapshotHub,
    clock: fn() -> OffsetDateTime,
}

impl<R: EntryRepository> EntryServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            hub: SnapshotHub::default(),
            clock: OffsetDateTime::now_utc,
        }
    }

    /// Replaces the source of creation timestamps.
    #[cfg(test)]
    pub(crate) fn with_clock(self, clock: fn() -> OffsetDateTime) -> Self {
        Self { clock, ..self }
    }

    async fn load(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
    ) -> Result<ExerciseEntries, EntryStoreError> {
        let entries = match exercise.freeform() {
            None => {
                let mut entries = self.repository.list_two_flags(user_id).await?;
                sort_newest_first(&mut entries, |e| (&e.timestamp, &e.id));
                ExerciseEntries::TwoFlags(entries)
            }
            Some(freeform) => {
                let mut entries = self.repository.list_freeform(user_id, freeform).await?;
                sort_newest_first(&mut entries, |e| (&e.timestamp, &e.id));
                ExerciseEntries::Freeform(entries)
            }
        };
        Ok(entries)
    }

    /// Pushes the committed state of a collection to its subscribers.
    ///
    /// The write already succeeded, so a failed reload is logged and the
    /// subscribers keep their previous snapshot.
    async fn publish(&self, user_id: &UserId, exercise: ExerciseKey) {
        let Some(channel) = self.hub.channel(*user_id, exercise).await else {
            return;
        };

        if let Err(err) = channel.publish_with(|| self.load(user_id, exercise)).await {
            tracing::warn!(%user_id, %exercise, "failed to refresh subscribers: {}", err);
        }
    }

    #[cfg(test)]
    pub(crate) async fn open_channels(&self) -> usize {
        self.hub.open_channels().await
    }
}

fn not_found_as(id: &EntryId) -> impl FnOnce(RepositoryError) -> EntryStoreError + '_ {
    move |err| match err {
        RepositoryError::NotFound(_) => EntryStoreError::NotFound(id.clone()),
        other => EntryStoreError::Repository(other),
    }
}

#[async_trait]
impl<R: EntryRepository> EntryService for EntryServiceImpl<R> {
    #[instrument(skip(self))]
    async fn create_two_flags_entry(&self, user_id: &UserId) -> Result<EntryId, EntryStoreError> {
        let entry = TwoFlagsEntry::empty(EntryId::generate(), (self.clock)());
        self.repository.insert_two_flags(user_id, &entry).await?;
        tracing::debug!(entry_id = %entry.id, "created two-flags entry");

        self.publish(user_id, ExerciseKey::TwoFlags).await;
        Ok(entry.id)
    }

    #[instrument(skip(self))]
    async fn create_freeform_entry(
        &self,
        user_id: &UserId,
        exercise: FreeformExercise,
    ) -> Result<EntryId, EntryStoreError> {
        let entry = FreeformEntry::empty(EntryId::generate(), (self.clock)());
        self.repository
            .insert_freeform(user_id, exercise, &entry)
            .await?;
        tracing::debug!(entry_id = %entry.id, "created freeform entry");

        self.publish(user_id, exercise.key()).await;
        Ok(entry.id)
    }

    #[instrument(skip(self))]
    async fn update_entry(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
        id: &EntryId,
        update: EntryUpdate,
    ) -> Result<(), EntryStoreError> {
        match (exercise.freeform(), &update) {
            (None, EntryUpdate::TwoFlags(update)) => self
                .repository
                .update_two_flags(user_id, id, update)
                .await
                .map_err(not_found_as(id))?,
            (Some(freeform), EntryUpdate::Freeform(update)) => self
                .repository
                .update_freeform(user_id, freeform, id, update)
                .await
                .map_err(not_found_as(id))?,
            _ => return Err(EntryStoreError::MismatchedUpdate(exercise)),
        }

        self.publish(user_id, exercise).await;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_entry(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
        id: &EntryId,
    ) -> Result<(), EntryStoreError> {
        self.repository.delete(user_id, exercise, id).await?;

        self.publish(user_id, exercise).await;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_entries(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
    ) -> Result<ExerciseEntries, EntryStoreError> {
        self.load(user_id, exercise).await
    }

    #[instrument(skip(self))]
    async fn subscribe_entries(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
    ) -> Result<EntrySubscription, EntryStoreError> {
        let (channel, receiver) = self.hub.subscribe(*user_id, exercise).await;
        // Refresh after subscribing so the first poll carries current state.
        channel
            .publish_with(|| self.load(user_id, exercise))
            .await?;

        Ok(EntrySubscription::new(receiver))
    }
}
