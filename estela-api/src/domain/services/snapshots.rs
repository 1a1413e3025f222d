use std::{collections::HashMap, sync::Arc};

use tokio::sync::{watch, Mutex};

use crate::domain::models::{ExerciseEntries, ExerciseKey, UserId};

type CollectionKey = (UserId, ExerciseKey);
type Snapshot = Arc<ExerciseEntries>;

/// One watch channel per collection that currently has subscribers.
pub(crate) struct Channel {
    sender: watch::Sender<Snapshot>,
    /// Serializes reload-then-send so an older read never overwrites a
    /// newer one.
    publish_lock: Mutex<()>,
}

impl Channel {
    /// Reloads the collection with `load` and replaces the snapshot.
    pub(crate) async fn publish_with<F, Fut, E>(&self, load: F) -> Result<(), E>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<ExerciseEntries, E>>,
    {
        let _guard = self.publish_lock.lock().await;
        let entries = load().await?;
        self.sender.send_replace(Arc::new(entries));
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct SnapshotHub {
    channels: Mutex<HashMap<CollectionKey, Arc<Channel>>>,
}

impl SnapshotHub {
    /// Channel for a collection, if anyone is still listening to it.
    pub(crate) async fn channel(
        &self,
        user_id: UserId,
        exercise: ExerciseKey,
    ) -> Option<Arc<Channel>> {
        let mut channels = self.channels.lock().await;
        channels.retain(|_, channel| channel.sender.receiver_count() > 0);
        channels.get(&(user_id, exercise)).cloned()
    }

    /// Registers a new receiver, creating the channel when needed.
    pub(crate) async fn subscribe(
        &self,
        user_id: UserId,
        exercise: ExerciseKey,
    ) -> (Arc<Channel>, watch::Receiver<Snapshot>) {
        let mut channels = self.channels.lock().await;
        channels.retain(|_, channel| channel.sender.receiver_count() > 0);

        let channel = channels
            .entry((user_id, exercise))
            .or_insert_with(|| {
                let (sender, _) = watch::channel(Arc::new(ExerciseEntries::empty(exercise)));
                Arc::new(Channel {
                    sender,
                    publish_lock: Mutex::new(()),
                })
            })
            .clone();
        let receiver = channel.sender.subscribe();

        (channel, receiver)
    }

    #[cfg(test)]
    pub(crate) async fn open_channels(&self) -> usize {
        let mut channels = self.channels.lock().await;
        channels.retain(|_, channel| channel.sender.receiver_count() > 0);
        channels.len()
    }
}

/// Live handle on one entry collection.
///
/// Each poll yields the full list; a slow consumer skips straight to the
/// latest snapshot. Dropping the handle unsubscribes.
#[derive(Debug)]
pub struct EntrySubscription {
    receiver: watch::Receiver<Snapshot>,
}

impl EntrySubscription {
    pub(crate) fn new(receiver: watch::Receiver<Snapshot>) -> Self {
        Self { receiver }
    }

    /// Waits for the next snapshot. Returns `None` once the store has shut
    /// the channel down.
    ///
    /// Cancel safe, so it can sit in a `tokio::select!` loop.
    pub async fn next(&mut self) -> Option<Snapshot> {
        self.receiver.changed().await.ok()?;
        Some(Arc::clone(&self.receiver.borrow_and_update()))
    }

    pub fn unsubscribe(self) {}
}
