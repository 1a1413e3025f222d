use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        models::{EntryId, EntryUpdate, ExerciseEntries, ExerciseKey},
        Preferences,
    },
    i18n::Translations,
    utils::date_format::{DateFormatError, LocalClock},
};

use super::{
    freeform::{FreeformCard, FreeformView},
    list_item::ListField,
    two_flags::{TwoFlagsCard, TwoFlagsView},
};

/// Everything a view needs to render besides its own state.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub preferences: Preferences,
    pub clock: LocalClock,
}

impl ViewContext {
    pub fn new(preferences: Preferences, clock: LocalClock) -> Self {
        Self { preferences, clock }
    }

    pub fn translations(&self) -> &'static Translations {
        self.preferences.translations()
    }
}

/// A user action sent by the client of a view session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ViewIntent {
    ToggleCard { entry_id: EntryId },
    ToggleGuide,
    AddEntry,
    AddItem { entry_id: EntryId, list: ListField },
    BeginEdit { entry_id: EntryId, list: ListField, index: usize },
    CommitItem { entry_id: EntryId, list: ListField, value: String },
    CancelEdit { entry_id: EntryId, list: ListField },
    RequestDeleteItem { entry_id: EntryId, list: ListField, index: usize },
    RequestDeleteEntry { entry_id: EntryId },
    ConfirmDelete,
    CancelDelete,
    SetLearning { entry_id: EntryId, value: String },
    SetTitle { entry_id: EntryId, value: String },
    SetBody { entry_id: EntryId, value: String },
    SetTimestamp { entry_id: EntryId, local: String },
}

/// A write a view asks the entry store to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryCommand {
    Create,
    Update { id: EntryId, update: EntryUpdate },
    Delete { id: EntryId },
}

impl EntryCommand {
    pub fn update(id: EntryId, update: impl Into<EntryUpdate>) -> Self {
        EntryCommand::Update {
            id,
            update: update.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTab {
    pub key: ExerciseKey,
    pub name: &'static str,
    pub icon: &'static str,
}

/// Tabs for the shell, in exercise order.
pub fn exercise_tabs(translations: &Translations) -> Vec<ExerciseTab> {
    ExerciseKey::ALL
        .into_iter()
        .map(|key| {
            let (name, icon) = exercise_title(key, translations);
            ExerciseTab { key, name, icon }
        })
        .collect()
}

pub fn exercise_title(key: ExerciseKey, translations: &Translations) -> (&'static str, &'static str) {
    let exercises = &translations.exercises;
    match key {
        ExerciseKey::TwoFlags => (exercises.two_flags.name, exercises.two_flags.icon),
        ExerciseKey::SignificantBond => (
            exercises.significant_bond.name,
            exercises.significant_bond.icon,
        ),
        ExerciseKey::IdealizedExpectations => (
            exercises.idealized_expectations.name,
            exercises.idealized_expectations.icon,
        ),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideSection {
    pub label: Option<&'static str>,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideView {
    pub visible: bool,
    pub toggle_label: &'static str,
    pub sections: Vec<GuideSection>,
}

impl GuideView {
    pub fn new(visible: bool, translations: &Translations, sections: Vec<GuideSection>) -> Self {
        let toggle_label = if visible {
            translations.nav.hide_guide
        } else {
            translations.nav.show_guide
        };
        Self {
            visible,
            toggle_label,
            sections,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePrompt {
    pub message: &'static str,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

impl DeletePrompt {
    pub fn new(message: &'static str, translations: &Translations) -> Self {
        Self {
            message,
            confirm_label: translations.common.delete,
            cancel_label: translations.common.cancel,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFieldView {
    pub label: Option<&'static str>,
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Cards {
    TwoFlags(Vec<TwoFlagsCard>),
    Freeform(Vec<FreeformCard>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseViewModel {
    pub exercise: ExerciseKey,
    pub name: &'static str,
    pub icon: &'static str,
    pub guide: GuideView,
    pub add_label: &'static str,
    pub empty_message: Option<&'static str>,
    pub delete_prompt: Option<DeletePrompt>,
    pub cards: Cards,
}

/// View state of one exercise tab.
#[derive(Debug)]
pub enum ExerciseView {
    TwoFlags(TwoFlagsView),
    Freeform(FreeformView),
}

impl ExerciseView {
    pub fn new(exercise: ExerciseKey) -> Self {
        match exercise.freeform() {
            None => ExerciseView::TwoFlags(TwoFlagsView::default()),
            Some(freeform) => ExerciseView::Freeform(FreeformView::new(freeform)),
        }
    }

    pub fn exercise(&self) -> ExerciseKey {
        match self {
            ExerciseView::TwoFlags(_) => ExerciseKey::TwoFlags,
            ExerciseView::Freeform(view) => view.exercise().key(),
        }
    }

    pub fn apply_snapshot(&mut self, snapshot: &ExerciseEntries) {
        match (self, snapshot) {
            (ExerciseView::TwoFlags(view), ExerciseEntries::TwoFlags(entries)) => {
                view.apply_snapshot(entries)
            }
            (ExerciseView::Freeform(view), ExerciseEntries::Freeform(entries)) => {
                view.apply_snapshot(entries)
            }
            (view, _) => {
                tracing::warn!(exercise = %view.exercise(), "ignoring snapshot of another entry kind")
            }
        }
    }

    /// Applies an intent to the view state, returning the write it calls
    /// for, if any. Intents naming entries or items missing from the latest
    /// snapshot are ignored.
    pub fn handle(
        &mut self,
        intent: ViewIntent,
        clock: &LocalClock,
    ) -> Result<Option<EntryCommand>, DateFormatError> {
        match self {
            ExerciseView::TwoFlags(view) => view.handle(intent, clock),
            ExerciseView::Freeform(view) => view.handle(intent, clock),
        }
    }

    /// Newly created entries open expanded.
    pub fn entry_created(&mut self, id: &EntryId) {
        match self {
            ExerciseView::TwoFlags(view) => view.cards_mut().expand(id),
            ExerciseView::Freeform(view) => view.cards_mut().expand(id),
        }
    }

    pub fn render(&self, context: &ViewContext) -> ExerciseViewModel {
        match self {
            ExerciseView::TwoFlags(view) => view.render(context),
            ExerciseView::Freeform(view) => view.render(context),
        }
    }
}
