use std::collections::HashMap;

use serde::Serialize;

use crate::{
    domain::models::{EntryId, ExerciseKey, TwoFlagsEntry, TwoFlagsUpdate},
    i18n::Translations,
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
    list_item::{with_new_item, ListField, ListItemEvent, ListItemState},
};

const STAR_BULLET: &str = "✦";
const TANGLE_BULLET: &str = "◆";

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveItem {
    index: usize,
    state: ListItemState,
}

/// View state of the two-flags exercise.
///
/// Each list section has at most one item that is not in the viewing
/// state, and the whole view has at most one pending delete confirmation.
#[derive(Debug, Default)]
pub struct TwoFlagsView {
    entries: Vec<TwoFlagsEntry>,
    cards: CardStates,
    guide_visible: bool,
    items: HashMap<(EntryId, ListField), ActiveItem>,
    pending_entry_delete: Option<EntryId>,
}

impl TwoFlagsView {
    pub fn apply_snapshot(&mut self, entries: &[TwoFlagsEntry]) {
        self.entries = entries.to_vec();

        let ids: Vec<&EntryId> = self.entries.iter().map(|e| &e.id).collect();
        self.cards.retain(&ids);

        let entries = &self.entries;
        self.items.retain(|(id, list), item| {
            entries
                .iter()
                .find(|e| &e.id == id)
                .is_some_and(|e| item.index < list.items(e).len())
        });
        if self
            .pending_entry_delete
            .as_ref()
            .is_some_and(|id| !entries.iter().any(|e| &e.id == id))
        {
            self.pending_entry_delete = None;
        }
    }

    pub(crate) fn cards_mut(&mut self) -> &mut CardStates {
        &mut self.cards
    }

    fn entry(&self, id: &EntryId) -> Option<&TwoFlagsEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn handle(
        &mut self,
        intent: ViewIntent,
        clock: &LocalClock,
    ) -> Result<Option<EntryCommand>, DateFormatError> {
        let command = match intent {
            ViewIntent::ToggleCard { entry_id } => {
                if self.entry(&entry_id).is_some() {
                    self.cards.toggle(&entry_id);
                }
                None
            }
            ViewIntent::ToggleGuide => {
                self.guide_visible = !self.guide_visible;
                None
            }
            ViewIntent::AddEntry => Some(EntryCommand::Create),
            ViewIntent::AddItem { entry_id, list } => self.entry(&entry_id).map(|entry| {
                let items = with_new_item(list.items(entry));
                EntryCommand::update(entry_id.clone(), list.replace_with(items))
            }),
            ViewIntent::BeginEdit {
                entry_id,
                list,
                index,
            } => self.item_event(entry_id, list, Some(index), ListItemEvent::BeginEdit),
            ViewIntent::CommitItem {
                entry_id,
                list,
                value,
            } => self.item_event(entry_id, list, None, ListItemEvent::Commit { value }),
            ViewIntent::CancelEdit { entry_id, list } => {
                self.item_event(entry_id, list, None, ListItemEvent::CancelEdit)
            }
            ViewIntent::RequestDeleteItem {
                entry_id,
                list,
                index,
            } => {
                if self.valid_index(&entry_id, list, index) {
                    self.clear_pending_delete();
                }
                self.item_event(entry_id, list, Some(index), ListItemEvent::RequestDelete)
            }
            ViewIntent::RequestDeleteEntry { entry_id } => {
                if self.entry(&entry_id).is_some() {
                    self.clear_pending_delete();
                    self.pending_entry_delete = Some(entry_id);
                }
                None
            }
            ViewIntent::ConfirmDelete => {
                if let Some(id) = self.pending_entry_delete.take() {
                    Some(EntryCommand::Delete { id })
                } else if let Some((entry_id, list)) = self.confirming_item() {
                    self.item_event(entry_id, list, None, ListItemEvent::ConfirmDelete)
                } else {
                    None
                }
            }
            ViewIntent::CancelDelete => {
                self.clear_pending_delete();
                None
            }
            ViewIntent::SetLearning { entry_id, value } => self
                .entry(&entry_id)
                .map(|_| EntryCommand::update(entry_id, TwoFlagsUpdate::Learning(value))),
            ViewIntent::SetTimestamp { entry_id, local } => {
                if self.entry(&entry_id).is_none() {
                    return Ok(None);
                }
                let timestamp = parse_editable_local_string(&local, clock.offset())?;
                Some(EntryCommand::update(
                    entry_id,
                    TwoFlagsUpdate::Timestamp(timestamp),
                ))
            }
            ViewIntent::SetTitle { .. } | ViewIntent::SetBody { .. } => None,
        };

        Ok(command)
    }

    fn valid_index(&self, entry_id: &EntryId, list: ListField, index: usize) -> bool {
        self.entry(entry_id)
            .is_some_and(|entry| index < list.items(entry).len())
    }

    /// Runs one list-item transition. With `index` set the event targets
    /// that item, abandoning any other active item of the section; without
    /// it the event targets the section's active item.
    fn item_event(
        &mut self,
        entry_id: EntryId,
        list: ListField,
        index: Option<usize>,
        event: ListItemEvent,
    ) -> Option<EntryCommand> {
        let items = list.items(self.entry(&entry_id)?).to_vec();
        let key = (entry_id, list);

        let (index, state) = match (index, self.items.get(&key)) {
            (Some(index), _) if index >= items.len() => return None,
            (Some(index), Some(active)) if active.index == index => (index, active.state.clone()),
            (Some(index), _) => (index, ListItemState::Viewing),
            (None, Some(active)) => (active.index, active.state.clone()),
            (None, None) => return None,
        };

        let (next, write) = state.handle(event, &items, index);
        if next == ListItemState::Viewing {
            self.items.remove(&key);
        } else {
            self.items.insert(key.clone(), ActiveItem { index, state: next });
        }

        let (entry_id, list) = key;
        write.map(|items| EntryCommand::update(entry_id, list.replace_with(items)))
    }

    fn confirming_item(&self) -> Option<(EntryId, ListField)> {
        self.items
            .iter()
            .find(|(_, item)| item.state == ListItemState::ConfirmingDelete)
            .map(|(key, _)| key.clone())
    }

    fn clear_pending_delete(&mut self) {
        self.pending_entry_delete = None;
        self.items
            .retain(|_, item| item.state != ListItemState::ConfirmingDelete);
    }

    fn item_state(&self, entry_id: &EntryId, list: ListField, index: usize) -> ListItemState {
        match self.items.get(&(entry_id.clone(), list)) {
            Some(active) if active.index == index => active.state.clone(),
            _ => ListItemState::Viewing,
        }
    }

    pub fn render(&self, context: &ViewContext) -> ExerciseViewModel {
        let t = context.translations();
        let exercise = &t.exercises.two_flags;

        let delete_prompt = if self.pending_entry_delete.is_some() {
            Some(DeletePrompt::new(t.two_flags.delete_record_confirm, t))
        } else if self.confirming_item().is_some() {
            Some(DeletePrompt::new(t.two_flags.delete_item_confirm, t))
        } else {
            None
        };

        ExerciseViewModel {
            exercise: ExerciseKey::TwoFlags,
            name: exercise.name,
            icon: exercise.icon,
            guide: GuideView::new(
                self.guide_visible,
                t,
                vec![
                    GuideSection {
                        label: Some(exercise.guide.section1_label),
                        text: exercise.guide.section1_desc,
                    },
                    GuideSection {
                        label: Some(exercise.guide.section2_label),
                        text: exercise.guide.section2_desc,
                    },
                    GuideSection {
                        label: None,
                        text: exercise.guide.instruction,
                    },
                ],
            ),
            add_label: exercise.add_label,
            empty_message: self.entries.is_empty().then_some(exercise.empty_message),
            delete_prompt,
            cards: Cards::TwoFlags(
                self.entries
                    .iter()
                    .map(|entry| self.render_card(entry, context))
                    .collect(),
            ),
        }
    }

    fn render_card(&self, entry: &TwoFlagsEntry, context: &ViewContext) -> TwoFlagsCard {
        let t = context.translations();
        let expanded = self.cards.state(&entry.id).is_expanded();

        let details = expanded.then(|| TwoFlagsDetails {
            date_label: t.two_flags.date_time_label,
            editable_timestamp: to_editable_local_string(entry.timestamp, context.clock.offset()),
            sections: ListField::ALL
                .into_iter()
                .map(|list| self.render_section(entry, list, t))
                .collect(),
            learning: TextFieldView {
                label: Some(t.two_flags.learning_label),
                placeholder: t.two_flags.learning_placeholder,
                value: entry.learning.clone(),
            },
            delete_label: t.two_flags.delete_record,
        });

        TwoFlagsCard {
            id: entry.id.clone(),
            expanded,
            title: to_display_string(entry.timestamp, &context.clock, t),
            star_badge: format!("{STAR_BULLET} {}", entry.star_events.len()),
            tangle_badge: format!("{TANGLE_BULLET} {}", entry.tangle_events.len()),
            details,
        }
    }

    fn render_section(
        &self,
        entry: &TwoFlagsEntry,
        list: ListField,
        t: &'static Translations,
    ) -> ListSectionView {
        let (icon, bullet, label, placeholder) = match list {
            ListField::StarEvents => (
                "✨",
                STAR_BULLET,
                t.two_flags.section1_label,
                t.two_flags.section1_placeholder,
            ),
            ListField::TangleEvents => (
                "🏴",
                TANGLE_BULLET,
                t.two_flags.section2_label,
                t.two_flags.section2_placeholder,
            ),
        };

        let items = list
            .items(entry)
            .iter()
            .enumerate()
            .map(|(index, text)| ListItemView {
                index,
                display_text: if text.is_empty() {
                    t.common.click_to_edit.to_string()
                } else {
                    text.clone()
                },
                text: text.clone(),
                state: self.item_state(&entry.id, list, index),
            })
            .collect();

        ListSectionView {
            list,
            icon,
            bullet,
            label,
            placeholder,
            add_label: t.common.add(label),
            edit_label: t.common.edit,
            delete_label: t.common.delete,
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFlagsCard {
    pub id: EntryId,
    pub expanded: bool,
    pub title: String,
    pub star_badge: String,
    pub tangle_badge: String,
    pub details: Option<TwoFlagsDetails>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFlagsDetails {
    pub date_label: &'static str,
    pub editable_timestamp: String,
    pub sections: Vec<ListSectionView>,
    pub learning: TextFieldView,
    pub delete_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSectionView {
    pub list: ListField,
    pub icon: &'static str,
    pub bullet: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub add_label: String,
    pub edit_label: &'static str,
    pub delete_label: &'static str,
    pub items: Vec<ListItemView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemView {
    pub index: usize,
    pub text: String,
    pub display_text: String,
    #[serde(flatten)]
    pub state: ListItemState,
}

#[cfg(test)]
mod tests {
    use time::macros::{datetime, offset};

    use super::*;
    use crate::{
        domain::{models::EntryUpdate, Language, Preferences},
        views::exercise::ExerciseView,
    };

    fn clock() -> LocalClock {
        LocalClock::fixed(datetime!(2026-01-15 18:00 UTC), offset!(UTC))
    }

    fn context(language: Language) -> ViewContext {
        ViewContext::new(
            Preferences {
                language,
                ..Preferences::default()
            },
            clock(),
        )
    }

    fn sample_entry() -> TwoFlagsEntry {
        TwoFlagsEntry {
            id: EntryId::from("e1"),
            timestamp: datetime!(2026-01-15 14:30 UTC),
            star_events: vec!["Morning walk".to_string(), "Deep conversation".to_string()],
            tangle_events: vec!["Work stress".to_string()],
            learning: String::new(),
        }
    }

    fn view_with(entries: &[TwoFlagsEntry]) -> TwoFlagsView {
        let mut view = TwoFlagsView::default();
        view.apply_snapshot(entries);
        view
    }

    fn card(model: &ExerciseViewModel, index: usize) -> &TwoFlagsCard {
        match &model.cards {
            Cards::TwoFlags(cards) => &cards[index],
            Cards::Freeform(_) => panic!("expected two-flags cards"),
        }
    }

    #[test]
    fn card_header_shows_date_and_badges() {
        let view = view_with(&[sample_entry()]);
        let model = view.render(&context(Language::En));
        let card = card(&model, 0);

        assert_eq!(card.title, "Today — Thursday January 15, 2026 — 2:30pm");
        assert_eq!(card.star_badge, "✦ 2");
        assert_eq!(card.tangle_badge, "◆ 1");
        assert!(!card.expanded);
        assert!(card.details.is_none());
    }

    #[test]
    fn committing_an_edit_replaces_the_whole_list() {
        let mut view = view_with(&[sample_entry()]);
        let id = EntryId::from("e1");

        let command = view
            .handle(
                ViewIntent::BeginEdit {
                    entry_id: id.clone(),
                    list: ListField::StarEvents,
                    index: 0,
                },
                &clock(),
            )
            .unwrap();
        assert_eq!(command, None);
        assert_eq!(
            view.item_state(&id, ListField::StarEvents, 0),
            ListItemState::Editing {
                draft: "Morning walk".to_string()
            }
        );

        let command = view
            .handle(
                ViewIntent::CommitItem {
                    entry_id: id.clone(),
                    list: ListField::StarEvents,
                    value: "Evening walk".to_string(),
                },
                &clock(),
            )
            .unwrap();

        assert_eq!(
            command,
            Some(EntryCommand::Update {
                id: id.clone(),
                update: EntryUpdate::TwoFlags(TwoFlagsUpdate::StarEvents(vec![
                    "Evening walk".to_string(),
                    "Deep conversation".to_string()
                ])),
            })
        );
        assert_eq!(
            view.item_state(&id, ListField::StarEvents, 0),
            ListItemState::Viewing
        );
    }

    #[test]
    fn beginning_another_edit_in_a_section_abandons_the_first() {
        let mut view = view_with(&[sample_entry()]);
        let id = EntryId::from("e1");
        for index in [0, 1] {
            view.handle(
                ViewIntent::BeginEdit {
                    entry_id: id.clone(),
                    list: ListField::StarEvents,
                    index,
                },
                &clock(),
            )
            .unwrap();
        }
        view.handle(
            ViewIntent::BeginEdit {
                entry_id: id.clone(),
                list: ListField::TangleEvents,
                index: 0,
            },
            &clock(),
        )
        .unwrap();

        assert_eq!(
            view.item_state(&id, ListField::StarEvents, 0),
            ListItemState::Viewing
        );
        assert!(matches!(
            view.item_state(&id, ListField::StarEvents, 1),
            ListItemState::Editing { .. }
        ));
        assert!(matches!(
            view.item_state(&id, ListField::TangleEvents, 0),
            ListItemState::Editing { .. }
        ));
    }

    #[test]
    fn only_one_delete_confirmation_is_pending() {
        let mut view = view_with(&[sample_entry()]);
        let id = EntryId::from("e1");

        view.handle(
            ViewIntent::RequestDeleteItem {
                entry_id: id.clone(),
                list: ListField::StarEvents,
                index: 1,
            },
            &clock(),
        )
        .unwrap();
        view.handle(
            ViewIntent::RequestDeleteItem {
                entry_id: id.clone(),
                list: ListField::TangleEvents,
                index: 0,
            },
            &clock(),
        )
        .unwrap();

        assert_eq!(
            view.item_state(&id, ListField::StarEvents, 1),
            ListItemState::Viewing
        );

        let command = view.handle(ViewIntent::ConfirmDelete, &clock()).unwrap();
        assert_eq!(
            command,
            Some(EntryCommand::update(
                id.clone(),
                TwoFlagsUpdate::TangleEvents(vec![])
            ))
        );
        assert_eq!(view.handle(ViewIntent::ConfirmDelete, &clock()).unwrap(), None);
    }

    #[test]
    fn entry_delete_waits_for_confirmation() {
        let mut view = view_with(&[sample_entry()]);
        let id = EntryId::from("e1");

        let command = view
            .handle(
                ViewIntent::RequestDeleteEntry {
                    entry_id: id.clone(),
                },
                &clock(),
            )
            .unwrap();
        assert_eq!(command, None);
        let model = view.render(&context(Language::Es));
        assert_eq!(
            model.delete_prompt.unwrap().message,
            "¿Seguro que quieres eliminar este registro completo?"
        );

        view.handle(ViewIntent::CancelDelete, &clock()).unwrap();
        assert_eq!(view.handle(ViewIntent::ConfirmDelete, &clock()).unwrap(), None);

        view.handle(
            ViewIntent::RequestDeleteEntry {
                entry_id: id.clone(),
            },
            &clock(),
        )
        .unwrap();
        let command = view.handle(ViewIntent::ConfirmDelete, &clock()).unwrap();
        assert_eq!(command, Some(EntryCommand::Delete { id }));
    }

    #[test]
    fn add_item_appends_an_empty_placeholder() {
        let mut entry = sample_entry();
        entry.tangle_events.clear();
        let mut view = view_with(&[entry]);

        let command = view
            .handle(
                ViewIntent::AddItem {
                    entry_id: EntryId::from("e1"),
                    list: ListField::TangleEvents,
                },
                &clock(),
            )
            .unwrap();

        assert_eq!(
            command,
            Some(EntryCommand::update(
                EntryId::from("e1"),
                TwoFlagsUpdate::TangleEvents(vec![String::new()])
            ))
        );
    }

    #[test]
    fn intents_for_vanished_items_are_ignored() {
        let mut view = view_with(&[sample_entry()]);
        let id = EntryId::from("e1");
        view.handle(
            ViewIntent::BeginEdit {
                entry_id: id.clone(),
                list: ListField::StarEvents,
                index: 1,
            },
            &clock(),
        )
        .unwrap();

        let mut shrunk = sample_entry();
        shrunk.star_events.truncate(1);
        view.apply_snapshot(&[shrunk]);

        let commit = view
            .handle(
                ViewIntent::CommitItem {
                    entry_id: id.clone(),
                    list: ListField::StarEvents,
                    value: "late".to_string(),
                },
                &clock(),
            )
            .unwrap();
        assert_eq!(commit, None);

        let stale = view
            .handle(
                ViewIntent::RequestDeleteItem {
                    entry_id: id,
                    list: ListField::StarEvents,
                    index: 5,
                },
                &clock(),
            )
            .unwrap();
        assert_eq!(stale, None);

        let missing = view
            .handle(
                ViewIntent::SetLearning {
                    entry_id: EntryId::from("gone"),
                    value: "x".to_string(),
                },
                &clock(),
            )
            .unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn timestamp_edits_are_read_in_local_time() {
        let mut view = view_with(&[sample_entry()]);
        let clock = LocalClock::fixed(datetime!(2026-01-15 18:00 UTC), offset!(-3));

        let command = view
            .handle(
                ViewIntent::SetTimestamp {
                    entry_id: EntryId::from("e1"),
                    local: "2026-01-14T21:15".to_string(),
                },
                &clock,
            )
            .unwrap();
        assert_eq!(
            command,
            Some(EntryCommand::update(
                EntryId::from("e1"),
                TwoFlagsUpdate::Timestamp(datetime!(2026-01-15 0:15 UTC))
            ))
        );

        let invalid = view.handle(
            ViewIntent::SetTimestamp {
                entry_id: EntryId::from("e1"),
                local: "not a date".to_string(),
            },
            &clock,
        );
        assert!(invalid.is_err());
    }

    #[test]
    fn expanded_card_renders_sections_in_the_active_language() {
        let mut entry = sample_entry();
        entry.tangle_events.push(String::new());
        let mut view = ExerciseView::TwoFlags(view_with(&[entry]));
        view.handle(
            ViewIntent::ToggleCard {
                entry_id: EntryId::from("e1"),
            },
            &clock(),
        )
        .unwrap();

        let model = view.render(&context(Language::Es));
        let Cards::TwoFlags(cards) = &model.cards else {
            panic!("expected two-flags cards");
        };
        let details = cards[0].details.as_ref().unwrap();
        assert_eq!(details.editable_timestamp, "2026-01-15T14:30");
        assert_eq!(details.sections[0].label, "Polvo de Estrellas");
        assert_eq!(details.sections[0].add_label, "Agregar polvo de estrellas");
        assert_eq!(details.sections[1].bullet, "◆");
        assert_eq!(details.sections[1].items[1].display_text, "Click para editar...");
        assert_eq!(details.learning.label, Some("¿Que aprendi hoy?"));

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(
            json["cards"][0]["details"]["sections"][0]["items"][0]["state"],
            "viewing"
        );
    }

    #[test]
    fn empty_collection_shows_the_empty_message() {
        let view = view_with(&[]);
        let model = view.render(&context(Language::En));

        assert_eq!(
            model.empty_message,
            Some("No records yet. Create your first daily record.")
        );
        assert!(!model.guide.visible);
        assert_eq!(model.guide.toggle_label, "View exercise guide");
    }
}
