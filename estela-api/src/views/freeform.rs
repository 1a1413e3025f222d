use serde::Serialize;

use crate::{
    domain::models::{EntryId, FreeformEntry, FreeformExercise, FreeformUpdate},
    i18n::FreeformExerciseStrings,
    utils::date_format::{
        parse_editable_local_string, to_display_string, to_editable_local_string,
        DateFormatError, LocalClock,
    },
};

use super::{
    entry_card::CardStates,
    exercise::{
        Cards, DeletePrompt, EntryCommand, ExerciseViewModel, GuideSection, GuideView,
        TextFieldView, ViewContext, ViewIntent,
    },
};

/// View state of a title/body exercise.
#[derive(Debug)]
pub struct FreeformView {
    exercise: FreeformExercise,
    entries: Vec<FreeformEntry>,
    cards: CardStates,
    guide_visible: bool,
    pending_delete: Option<EntryId>,
}

impl FreeformView {
    pub fn new(exercise: FreeformExercise) -> Self {
        Self {
            exercise,
            entries: Vec::new(),
            cards: CardStates::default(),
            guide_visible: false,
            pending_delete: None,
        }
    }

    pub fn exercise(&self) -> FreeformExercise {
        self.exercise
    }

    pub(crate) fn cards_mut(&mut self) -> &mut CardStates {
        &mut self.cards
    }

    pub fn apply_snapshot(&mut self, entries: &[FreeformEntry]) {
        self.entries = entries.to_vec();

        let ids: Vec<&EntryId> = self.entries.iter().map(|e| &e.id).collect();
        self.cards.retain(&ids);
        if self
            .pending_delete
            .as_ref()
            .is_some_and(|id| !ids.contains(&id))
        {
            self.pending_delete = None;
        }
    }

    fn has_entry(&self, id: &EntryId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    pub fn handle(
        &mut self,
        intent: ViewIntent,
        clock: &LocalClock,
    ) -> Result<Option<EntryCommand>, DateFormatError> {
        let command = match intent {
            ViewIntent::ToggleCard { entry_id } => {
                if self.has_entry(&entry_id) {
                    self.cards.toggle(&entry_id);
                }
                None
            }
            ViewIntent::ToggleGuide => {
                self.guide_visible = !self.guide_visible;
                None
            }
            ViewIntent::AddEntry => Some(EntryCommand::Create),
            ViewIntent::RequestDeleteEntry { entry_id } => {
                if self.has_entry(&entry_id) {
                    self.pending_delete = Some(entry_id);
                }
                None
            }
            ViewIntent::ConfirmDelete => self
                .pending_delete
                .take()
                .map(|id| EntryCommand::Delete { id }),
            ViewIntent::CancelDelete => {
                self.pending_delete = None;
                None
            }
            ViewIntent::SetTitle { entry_id, value } => self
                .has_entry(&entry_id)
                .then(|| EntryCommand::update(entry_id, FreeformUpdate::Title(value))),
            ViewIntent::SetBody { entry_id, value } => self
                .has_entry(&entry_id)
                .then(|| EntryCommand::update(entry_id, FreeformUpdate::Body(value))),
            ViewIntent::SetTimestamp { entry_id, local } => {
                if !self.has_entry(&entry_id) {
                    return Ok(None);
                }
                let timestamp = parse_editable_local_string(&local, clock.offset())?;
                Some(EntryCommand::update(
                    entry_id,
                    FreeformUpdate::Timestamp(timestamp),
                ))
            }
            ViewIntent::AddItem { .. }
            | ViewIntent::BeginEdit { .. }
            | ViewIntent::CommitItem { .. }
            | ViewIntent::CancelEdit { .. }
            | ViewIntent::RequestDeleteItem { .. }
            | ViewIntent::SetLearning { .. } => None,
        };

        Ok(command)
    }

    fn strings(&self, context: &ViewContext) -> &'static FreeformExerciseStrings {
        let exercises = &context.translations().exercises;
        match self.exercise {
            FreeformExercise::SignificantBond => &exercises.significant_bond,
            FreeformExercise::IdealizedExpectations => &exercises.idealized_expectations,
        }
    }

    pub fn render(&self, context: &ViewContext) -> ExerciseViewModel {
        let t = context.translations();
        let exercise = self.strings(context);

        ExerciseViewModel {
            exercise: self.exercise.key(),
            name: exercise.name,
            icon: exercise.icon,
            guide: GuideView::new(
                self.guide_visible,
                t,
                vec![
                    GuideSection {
                        label: Some(t.freeform.instruction_label),
                        text: exercise.description,
                    },
                    GuideSection {
                        label: Some(t.freeform.questions_label),
                        text: exercise.questions,
                    },
                ],
            ),
            add_label: exercise.add_label,
            empty_message: self.entries.is_empty().then_some(exercise.empty_message),
            delete_prompt: self
                .pending_delete
                .as_ref()
                .map(|_| DeletePrompt::new(t.freeform.delete_entry_confirm, t)),
            cards: Cards::Freeform(
                self.entries
                    .iter()
                    .map(|entry| self.render_card(entry, context))
                    .collect(),
            ),
        }
    }

    fn render_card(&self, entry: &FreeformEntry, context: &ViewContext) -> FreeformCard {
        let t = context.translations();
        let expanded = self.cards.state(&entry.id).is_expanded();

        let title = if entry.title.is_empty() {
            t.freeform.no_title.to_string()
        } else {
            entry.title.clone()
        };

        let details = expanded.then(|| FreeformDetails {
            date_label: t.freeform.date_label,
            editable_timestamp: to_editable_local_string(entry.timestamp, context.clock.offset()),
            title: TextFieldView {
                label: None,
                placeholder: t.freeform.title_placeholder,
                value: entry.title.clone(),
            },
            body: TextFieldView {
                label: None,
                placeholder: t.freeform.content_placeholder,
                value: entry.body.clone(),
            },
            delete_label: t.freeform.delete_entry,
        });

        FreeformCard {
            id: entry.id.clone(),
            expanded,
            title,
            subtitle: to_display_string(entry.timestamp, &context.clock, t),
            details,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeformCard {
    pub id: EntryId,
    pub expanded: bool,
    pub title: String,
    pub subtitle: String,
    pub details: Option<FreeformDetails>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeformDetails {
    pub date_label: &'static str,
    pub editable_timestamp: String,
    pub title: TextFieldView,
    pub body: TextFieldView,
    pub delete_label: &'static str,
}
