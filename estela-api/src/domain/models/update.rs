use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{ExerciseKey, FreeformEntry, TwoFlagsEntry};

/// A single-field change to a two-flags entry.
///
/// List variants carry the complete replacement list; the store never
/// merges list elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum TwoFlagsUpdate {
    #[serde(with = "time::serde::rfc3339")]
    Timestamp(OffsetDateTime),
    StarEvents(Vec<String>),
    TangleEvents(Vec<String>),
    Learning(String),
}

impl TwoFlagsUpdate {
    pub fn apply(&self, entry: &mut TwoFlagsEntry) {
        match self {
            TwoFlagsUpdate::Timestamp(timestamp) => entry.timestamp = *timestamp,
            TwoFlagsUpdate::StarEvents(items) => entry.star_events = items.clone(),
            TwoFlagsUpdate::TangleEvents(items) => entry.tangle_events = items.clone(),
            TwoFlagsUpdate::Learning(learning) => entry.learning = learning.clone(),
        }
    }
}

/// A single-field change to a freeform entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FreeformUpdate {
    #[serde(with = "time::serde::rfc3339")]
    Timestamp(OffsetDateTime),
    Title(String),
    Body(String),
}

impl FreeformUpdate {
    pub fn apply(&self, entry: &mut FreeformEntry) {
        match self {
            FreeformUpdate::Timestamp(timestamp) => entry.timestamp = *timestamp,
            FreeformUpdate::Title(title) => entry.title = title.clone(),
            FreeformUpdate::Body(body) => entry.body = body.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryUpdate {
    TwoFlags(TwoFlagsUpdate),
    Freeform(FreeformUpdate),
}

impl EntryUpdate {
    /// Interprets a `{ "field": ..., "value": ... }` payload for the entry
    /// kind stored under `exercise`.
    pub fn from_json(
        exercise: ExerciseKey,
        payload: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        match exercise {
            ExerciseKey::TwoFlags => serde_json::from_value(payload).map(EntryUpdate::TwoFlags),
            _ => serde_json::from_value(payload).map(EntryUpdate::Freeform),
        }
    }
}

impl From<TwoFlagsUpdate> for EntryUpdate {
    fn from(update: TwoFlagsUpdate) -> Self {
        EntryUpdate::TwoFlags(update)
    }
}

impl From<FreeformUpdate> for EntryUpdate {
    fn from(update: FreeformUpdate) -> Self {
        EntryUpdate::Freeform(update)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn parses_list_replacement_for_two_flags() {
        let update = EntryUpdate::from_json(
            ExerciseKey::TwoFlags,
            json!({ "field": "starEvents", "value": ["Evening walk", "Deep conversation"] }),
        )
        .unwrap();

        assert_eq!(
            update,
            EntryUpdate::TwoFlags(TwoFlagsUpdate::StarEvents(vec![
                "Evening walk".to_string(),
                "Deep conversation".to_string()
            ]))
        );
    }

    #[test]
    fn parses_timestamp_for_freeform() {
        let update = EntryUpdate::from_json(
            ExerciseKey::IdealizedExpectations,
            json!({ "field": "timestamp", "value": "2026-06-10T09:00:00Z" }),
        )
        .unwrap();

        assert_eq!(
            update,
            EntryUpdate::Freeform(FreeformUpdate::Timestamp(datetime!(2026-06-10 9:00 UTC)))
        );
    }

    #[test]
    fn rejects_fields_of_the_other_entry_kind() {
        let result = EntryUpdate::from_json(
            ExerciseKey::SignificantBond,
            json!({ "field": "learning", "value": "nope" }),
        );
        assert!(result.is_err());

        let result = EntryUpdate::from_json(
            ExerciseKey::TwoFlags,
            json!({ "field": "title", "value": "nope" }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn apply_replaces_only_the_named_field() {
        let mut entry = TwoFlagsEntry::empty("e1".into(), datetime!(2026-01-01 0:00 UTC));
        entry.learning = "keep".to_string();

        TwoFlagsUpdate::TangleEvents(vec!["Work stress".to_string()]).apply(&mut entry);

        assert_eq!(entry.tangle_events, vec!["Work stress".to_string()]);
        assert!(entry.star_events.is_empty());
        assert_eq!(entry.learning, "keep");
    }
}
