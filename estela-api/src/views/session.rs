use std::sync::Arc;

use serde::Serialize;
use tracing::instrument;

use crate::{
    domain::{
        models::{ExerciseEntries, ExerciseKey, UserId},
        ports::inbound::EntryService,
        services::EntrySubscription,
        EntryStoreError,
    },
    utils::date_format::{DateFormatError, LocalClock},
};

use super::exercise::{EntryCommand, ExerciseView, ExerciseViewModel, ViewContext, ViewIntent};

#[derive(Debug, thiserror::Error)]
pub enum ViewSessionError {
    #[error(transparent)]
    Store(#[from] EntryStoreError),
    #[error(transparent)]
    InvalidDate(#[from] DateFormatError),
    #[error("malformed intent: {0}")]
    MalformedIntent(#[from] serde_json::Error),
}

/// Messages pushed to the client of a view session.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    Loading { message: &'static str },
    View { view: ExerciseViewModel },
    Error { message: String },
}

/// One client's view of one exercise collection.
///
/// The session renders only what the store has committed: writes go out
/// through the entry service and come back as snapshots.
pub struct ViewSession {
    user_id: UserId,
    view: ExerciseView,
    context: ViewContext,
    service: Arc<dyn EntryService>,
    loaded: bool,
}

impl ViewSession {
    pub async fn open(
        service: Arc<dyn EntryService>,
        user_id: UserId,
        exercise: ExerciseKey,
        context: ViewContext,
    ) -> Result<(Self, EntrySubscription), ViewSessionError> {
        let subscription = service.subscribe_entries(&user_id, exercise).await?;
        let session = Self {
            user_id,
            view: ExerciseView::new(exercise),
            context,
            service,
            loaded: false,
        };
        Ok((session, subscription))
    }

    pub fn exercise(&self) -> ExerciseKey {
        self.view.exercise()
    }

    pub fn clock(&self) -> &LocalClock {
        &self.context.clock
    }

    /// Replaces the clock used for relative dates, for long-lived sessions
    /// that cross midnight.
    pub fn set_clock(&mut self, clock: LocalClock) {
        self.context.clock = clock;
    }

    pub fn apply_snapshot(&mut self, snapshot: &ExerciseEntries) {
        self.view.apply_snapshot(snapshot);
        self.loaded = true;
    }

    /// Parses and dispatches a client message.
    pub async fn handle_message(&mut self, text: &str) -> Result<(), ViewSessionError> {
        let intent: ViewIntent = serde_json::from_str(text)?;
        self.dispatch(intent).await
    }

    #[instrument(skip(self), fields(user_id = %self.user_id, exercise = %self.exercise()))]
    pub async fn dispatch(&mut self, intent: ViewIntent) -> Result<(), ViewSessionError> {
        let Some(command) = self.view.handle(intent, &self.context.clock)? else {
            return Ok(());
        };

        let exercise = self.exercise();
        match command {
            EntryCommand::Create => {
                let id = self.service.create_entry(&self.user_id, exercise).await?;
                self.view.entry_created(&id);
            }
            EntryCommand::Update { id, update } => {
                self.service
                    .update_entry(&self.user_id, exercise, &id, update)
                    .await?;
            }
            EntryCommand::Delete { id } => {
                self.service
                    .delete_entry(&self.user_id, exercise, &id)
                    .await?;
            }
        }

        Ok(())
    }

    pub fn render(&self) -> ServerMessage {
        if !self.loaded {
            return ServerMessage::Loading {
                message: self.context.translations().common.loading,
            };
        }

        ServerMessage::View {
            view: self.view.render(&self.context),
        }
    }
}
