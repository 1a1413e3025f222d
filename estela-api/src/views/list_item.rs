use serde::{Deserialize, Serialize};

use crate::domain::models::{TwoFlagsEntry, TwoFlagsUpdate};

/// The two ordered lists of a two-flags entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListField {
    StarEvents,
    TangleEvents,
}

impl ListField {
    pub const ALL: [ListField; 2] = [ListField::StarEvents, ListField::TangleEvents];

    pub fn items(self, entry: &TwoFlagsEntry) -> &[String] {
        match self {
            ListField::StarEvents => &entry.star_events,
            ListField::TangleEvents => &entry.tangle_events,
        }
    }

    /// Full replacement of this list.
    pub fn replace_with(self, items: Vec<String>) -> TwoFlagsUpdate {
        match self {
            ListField::StarEvents => TwoFlagsUpdate::StarEvents(items),
            ListField::TangleEvents => TwoFlagsUpdate::TangleEvents(items),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ListItemState {
    #[default]
    Viewing,
    Editing {
        draft: String,
    },
    ConfirmingDelete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItemEvent {
    BeginEdit,
    Commit { value: String },
    CancelEdit,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
}

impl ListItemState {
    /// Advances the item at `index` of `items`.
    ///
    /// Returns the next state and, when the event commits a change, the
    /// replacement list to write. Events that do not apply in the current
    /// state leave it unchanged.
    pub fn handle(
        self,
        event: ListItemEvent,
        items: &[String],
        index: usize,
    ) -> (ListItemState, Option<Vec<String>>) {
        match (self, event) {
            (ListItemState::Viewing, ListItemEvent::BeginEdit) => {
                let draft = items.get(index).cloned().unwrap_or_default();
                (ListItemState::Editing { draft }, None)
            }
            (ListItemState::Editing { .. }, ListItemEvent::Commit { value }) => {
                let mut replaced = items.to_vec();
                match replaced.get_mut(index) {
                    Some(item) => *item = value,
                    None => return (ListItemState::Viewing, None),
                }
                (ListItemState::Viewing, Some(replaced))
            }
            (ListItemState::Editing { .. }, ListItemEvent::CancelEdit) => {
                (ListItemState::Viewing, None)
            }
            (
                ListItemState::Viewing | ListItemState::Editing { .. },
                ListItemEvent::RequestDelete,
            ) => (ListItemState::ConfirmingDelete, None),
            (ListItemState::ConfirmingDelete, ListItemEvent::ConfirmDelete) => {
                if index >= items.len() {
                    return (ListItemState::Viewing, None);
                }
                let mut remaining = items.to_vec();
                remaining.remove(index);
                (ListItemState::Viewing, Some(remaining))
            }
            (ListItemState::ConfirmingDelete, ListItemEvent::CancelDelete) => {
                (ListItemState::Viewing, None)
            }
            (state, _) => (state, None),
        }
    }
}

/// List with an empty placeholder item appended.
pub fn with_new_item(items: &[String]) -> Vec<String> {
    let mut extended = items.to_vec();
    extended.push(String::new());
    extended
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn edit_then_commit_replaces_only_that_index() {
        let list = items(&["Morning walk", "Deep conversation"]);

        let (state, write) = ListItemState::Viewing.handle(ListItemEvent::BeginEdit, &list, 0);
        assert_eq!(
            state,
            ListItemState::Editing {
                draft: "Morning walk".to_string()
            }
        );
        assert_eq!(write, None);

        let (state, write) = state.handle(
            ListItemEvent::Commit {
                value: "Evening walk".to_string(),
            },
            &list,
            0,
        );
        assert_eq!(state, ListItemState::Viewing);
        assert_eq!(write, Some(items(&["Evening walk", "Deep conversation"])));
    }

    #[test]
    fn cancel_edit_writes_nothing() {
        let list = items(&["a"]);
        let (state, _) = ListItemState::Viewing.handle(ListItemEvent::BeginEdit, &list, 0);

        let (state, write) = state.handle(ListItemEvent::CancelEdit, &list, 0);

        assert_eq!(state, ListItemState::Viewing);
        assert_eq!(write, None);
    }

    #[test]
    fn delete_requires_confirmation() {
        let list = items(&["a", "b", "c"]);

        let (state, write) = ListItemState::Viewing.handle(ListItemEvent::RequestDelete, &list, 1);
        assert_eq!(state, ListItemState::ConfirmingDelete);
        assert_eq!(write, None);

        let (cancelled, write) = state.clone().handle(ListItemEvent::CancelDelete, &list, 1);
        assert_eq!(cancelled, ListItemState::Viewing);
        assert_eq!(write, None);

        let (state, write) = state.handle(ListItemEvent::ConfirmDelete, &list, 1);
        assert_eq!(state, ListItemState::Viewing);
        assert_eq!(write, Some(items(&["a", "c"])));
    }

    #[test]
    fn deleting_the_only_item_then_adding_leaves_one_empty_item() {
        let list = items(&["only"]);
        let (state, _) = ListItemState::Viewing.handle(ListItemEvent::RequestDelete, &list, 0);
        let (_, write) = state.handle(ListItemEvent::ConfirmDelete, &list, 0);

        let emptied = write.unwrap();
        assert!(emptied.is_empty());
        assert_eq!(with_new_item(&emptied), vec![String::new()]);
    }

    #[test]
    fn events_outside_their_state_are_ignored() {
        let list = items(&["a"]);

        let (state, write) = ListItemState::Viewing.handle(
            ListItemEvent::Commit {
                value: "x".to_string(),
            },
            &list,
            0,
        );
        assert_eq!(state, ListItemState::Viewing);
        assert_eq!(write, None);

        let (state, write) = ListItemState::Viewing.handle(ListItemEvent::ConfirmDelete, &list, 0);
        assert_eq!(state, ListItemState::Viewing);
        assert_eq!(write, None);
    }

    #[test]
    fn stale_index_commits_nothing() {
        let editing = ListItemState::Editing {
            draft: "x".to_string(),
        };

        let (state, write) = editing.handle(
            ListItemEvent::Commit {
                value: "x".to_string(),
            },
            &items(&[]),
            3,
        );

        assert_eq!(state, ListItemState::Viewing);
        assert_eq!(write, None);
    }
}
