use std::collections::HashMap;

use serde::Serialize;

use crate::domain::models::EntryId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CardState {
    #[default]
    Collapsed,
    Expanded,
}

impl CardState {
    pub fn toggled(self) -> Self {
        match self {
            CardState::Collapsed => CardState::Expanded,
            CardState::Expanded => CardState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == CardState::Expanded
    }
}

/// Expand state of every rendered card in one view. Not persisted.
#[derive(Debug, Default)]
pub struct CardStates {
    states: HashMap<EntryId, CardState>,
}

impl CardStates {
    pub fn state(&self, id: &EntryId) -> CardState {
        self.states.get(id).copied().unwrap_or_default()
    }

    pub fn toggle(&mut self, id: &EntryId) -> CardState {
        let state = self.state(id).toggled();
        self.states.insert(id.clone(), state);
        state
    }

    pub fn expand(&mut self, id: &EntryId) {
        self.states.insert(id.clone(), CardState::Expanded);
    }

    /// Forgets cards whose entries are gone from the latest snapshot.
    pub fn retain(&mut self, ids: &[&EntryId]) {
        self.states.retain(|id, _| ids.contains(&id));
    }
}
