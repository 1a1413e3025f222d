//! In-memory entry repository for tests.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, RwLock,
    },
};

use async_trait::async_trait;

use crate::{
    domain::{
        models::{
            sort_newest_first, EntryId, ExerciseKey, FreeformEntry, FreeformExercise,
            FreeformUpdate, TwoFlagsEntry, TwoFlagsUpdate, UserId,
        },
        ports::outbound::EntryRepository,
    },
    repositories::RepositoryError,
};

#[derive(Debug, Clone)]
enum StoredEntry {
    TwoFlags(TwoFlagsEntry),
    Freeform(FreeformEntry),
}

/// Entries keyed by owner, collection and id.
#[derive(Clone, Default)]
pub struct MockEntryRepository {
    entries: Arc<RwLock<HashMap<(UserId, ExerciseKey, EntryId), StoredEntry>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MockEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail, as if the database went away.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    pub fn two_flags(&self, user_id: UserId, id: &EntryId) -> Option<TwoFlagsEntry> {
        match self
            .entries
            .read()
            .unwrap()
            .get(&(user_id, ExerciseKey::TwoFlags, id.clone()))
        {
            Some(StoredEntry::TwoFlags(entry)) => Some(entry.clone()),
            _ => None,
        }
    }

    fn check_writable(&self) -> Result<(), RepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::DatabaseError(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn insert(&self, key: (UserId, ExerciseKey, EntryId), entry: StoredEntry) {
        self.entries.write().unwrap().insert(key, entry);
    }
}

#[async_trait]
impl EntryRepository for MockEntryRepository {
    async fn insert_two_flags(
        &self,
        user_id: &UserId,
        entry: &TwoFlagsEntry,
    ) -> Result<(), RepositoryError> {
        self.check_writable()?;
        self.insert(
            (*user_id, ExerciseKey::TwoFlags, entry.id.clone()),
            StoredEntry::TwoFlags(entry.clone()),
        );
        Ok(())
    }

    async fn insert_freeform(
        &self,
        user_id: &UserId,
        exercise: FreeformExercise,
        entry: &FreeformEntry,
    ) -> Result<(), RepositoryError> {
        self.check_writable()?;
        self.insert(
            (*user_id, exercise.key(), entry.id.clone()),
            StoredEntry::Freeform(entry.clone()),
        );
        Ok(())
    }

    async fn update_two_flags(
        &self,
        user_id: &UserId,
        id: &EntryId,
        update: &TwoFlagsUpdate,
    ) -> Result<(), RepositoryError> {
        self.check_writable()?;
        let mut entries = self.entries.write().unwrap();
        match entries.get_mut(&(*user_id, ExerciseKey::TwoFlags, id.clone())) {
            Some(StoredEntry::TwoFlags(entry)) => {
                update.apply(entry);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound(format!("entry {id}"))),
        }
    }

    async fn update_freeform(
        &self,
        user_id: &UserId,
        exercise: FreeformExercise,
        id: &EntryId,
        update: &FreeformUpdate,
    ) -> Result<(), RepositoryError> {
        self.check_writable()?;
        let mut entries = self.entries.write().unwrap();
        match entries.get_mut(&(*user_id, exercise.key(), id.clone())) {
            Some(StoredEntry::Freeform(entry)) => {
                update.apply(entry);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound(format!("entry {id}"))),
        }
    }

    async fn delete(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
        id: &EntryId,
    ) -> Result<(), RepositoryError> {
        self.check_writable()?;
        self.entries
            .write()
            .unwrap()
            .remove(&(*user_id, exercise, id.clone()));
        Ok(())
    }

    async fn list_two_flags(&self, user_id: &UserId) -> Result<Vec<TwoFlagsEntry>, RepositoryError> {
        let mut list: Vec<TwoFlagsEntry> = self
            .entries
            .read()
            .unwrap()
            .iter()
            .filter_map(|((owner, exercise, _), entry)| match entry {
                StoredEntry::TwoFlags(entry)
                    if owner == user_id && *exercise == ExerciseKey::TwoFlags =>
                {
                    Some(entry.clone())
                }
                _ => None,
            })
            .collect();
        sort_newest_first(&mut list, |e| (&e.timestamp, &e.id));
        Ok(list)
    }

    async fn list_freeform(
        &self,
        user_id: &UserId,
        exercise: FreeformExercise,
    ) -> Result<Vec<FreeformEntry>, RepositoryError> {
        let key = exercise.key();
        let mut list: Vec<FreeformEntry> = self
            .entries
            .read()
            .unwrap()
            .iter()
            .filter_map(|((owner, stored_key, _), entry)| match entry {
                StoredEntry::Freeform(entry) if owner == user_id && *stored_key == key => {
                    Some(entry.clone())
                }
                _ => None,
            })
            .collect();
        sort_newest_first(&mut list, |e| (&e.timestamp, &e.id));
        Ok(list)
    }
}
