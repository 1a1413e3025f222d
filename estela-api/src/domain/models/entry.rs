use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use time::OffsetDateTime;

use super::EntryId;

/// Identifies one of the three per-user exercise collections.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
pub enum ExerciseKey {
    #[serde(rename = "ejercicio1")]
    #[strum(serialize = "ejercicio1")]
    TwoFlags,
    #[serde(rename = "ejercicio2")]
    #[strum(serialize = "ejercicio2")]
    SignificantBond,
    #[serde(rename = "ejercicio3")]
    #[strum(serialize = "ejercicio3")]
    IdealizedExpectations,
}

impl ExerciseKey {
    /// Tab order of the exercises.
    pub const ALL: [ExerciseKey; 3] = [
        ExerciseKey::TwoFlags,
        ExerciseKey::SignificantBond,
        ExerciseKey::IdealizedExpectations,
    ];

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn freeform(self) -> Option<FreeformExercise> {
        match self {
            ExerciseKey::TwoFlags => None,
            ExerciseKey::SignificantBond => Some(FreeformExercise::SignificantBond),
            ExerciseKey::IdealizedExpectations => Some(FreeformExercise::IdealizedExpectations),
        }
    }
}

/// The exercises whose entries are freeform title/body documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FreeformExercise {
    #[serde(rename = "ejercicio2")]
    SignificantBond,
    #[serde(rename = "ejercicio3")]
    IdealizedExpectations,
}

impl FreeformExercise {
    pub fn key(self) -> ExerciseKey {
        match self {
            FreeformExercise::SignificantBond => ExerciseKey::SignificantBond,
            FreeformExercise::IdealizedExpectations => ExerciseKey::IdealizedExpectations,
        }
    }
}

impl From<FreeformExercise> for ExerciseKey {
    fn from(exercise: FreeformExercise) -> Self {
        exercise.key()
    }
}

/// A daily log with two ordered lists of moments and one reflection.
///
/// List order is the display/edit order. Empty strings are valid items
/// waiting for user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFlagsEntry {
    pub id: EntryId,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub star_events: Vec<String>,
    pub tangle_events: Vec<String>,
    pub learning: String,
}

impl TwoFlagsEntry {
    /// A new document with empty fields, stamped with `timestamp`.
    pub fn empty(id: EntryId, timestamp: OffsetDateTime) -> Self {
        Self {
            id,
            timestamp,
            star_events: Vec::new(),
            tangle_events: Vec::new(),
            learning: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeformEntry {
    pub id: EntryId,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub title: String,
    pub body: String,
}

impl FreeformEntry {
    pub fn empty(id: EntryId, timestamp: OffsetDateTime) -> Self {
        Self {
            id,
            timestamp,
            title: String::new(),
            body: String::new(),
        }
    }
}

/// Full contents of one exercise collection, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExerciseEntries {
    TwoFlags(Vec<TwoFlagsEntry>),
    Freeform(Vec<FreeformEntry>),
}

impl ExerciseEntries {
    pub fn empty(exercise: ExerciseKey) -> Self {
        match exercise {
            ExerciseKey::TwoFlags => ExerciseEntries::TwoFlags(Vec::new()),
            _ => ExerciseEntries::Freeform(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ExerciseEntries::TwoFlags(entries) => entries.len(),
            ExerciseEntries::Freeform(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> Vec<&EntryId> {
        match self {
            ExerciseEntries::TwoFlags(entries) => entries.iter().map(|e| &e.id).collect(),
            ExerciseEntries::Freeform(entries) => entries.iter().map(|e| &e.id).collect(),
        }
    }
}

/// Sorts by timestamp descending, breaking ties by id so the order is total.
pub fn sort_newest_first<T>(entries: &mut [T], key: impl Fn(&T) -> (&OffsetDateTime, &EntryId)) {
    entries.sort_by(|a, b| {
        let (a_time, a_id) = key(a);
        let (b_time, b_id) = key(b);
        b_time.cmp(a_time).then_with(|| b_id.cmp(a_id))
    });
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use time::macros::datetime;

    use super::*;

    #[test]
    fn exercise_keys_round_trip_through_their_collection_names() {
        for key in ExerciseKey::ALL {
            assert_eq!(ExerciseKey::from_str(key.as_str()).unwrap(), key);
            assert_eq!(key.to_string(), key.as_str());
        }
        assert!(ExerciseKey::from_str("ejercicio4").is_err());
    }

    #[test]
    fn collection_names_match_the_wire_names() {
        let names: Vec<&str> = ExerciseKey::ALL.iter().map(|key| key.as_str()).collect();
        assert_eq!(names, ["ejercicio1", "ejercicio2", "ejercicio3"]);

        for key in ExerciseKey::ALL {
            assert_eq!(serde_json::to_value(key).unwrap(), key.as_str());
        }
    }

    #[test]
    fn only_the_last_two_exercises_are_freeform() {
        assert_eq!(ExerciseKey::TwoFlags.freeform(), None);
        assert_eq!(
            ExerciseKey::SignificantBond.freeform(),
            Some(FreeformExercise::SignificantBond)
        );
        assert_eq!(
            FreeformExercise::IdealizedExpectations.key(),
            ExerciseKey::IdealizedExpectations
        );
    }

    #[test]
    fn two_flags_entry_uses_camel_case_wire_names() {
        let entry = TwoFlagsEntry {
            id: EntryId::from("e1"),
            timestamp: datetime!(2026-01-15 14:30 UTC),
            star_events: vec!["Morning walk".to_string()],
            tangle_events: vec![],
            learning: String::new(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "e1");
        assert_eq!(json["timestamp"], "2026-01-15T14:30:00Z");
        assert_eq!(json["starEvents"][0], "Morning walk");
        assert!(json["tangleEvents"].as_array().unwrap().is_empty());
        assert_eq!(json["learning"], "");
    }

    #[test]
    fn sort_orders_newest_first_with_id_tiebreak() {
        let older = FreeformEntry::empty("a".into(), datetime!(2026-01-01 8:00 UTC));
        let newer = FreeformEntry::empty("b".into(), datetime!(2026-01-02 8:00 UTC));
        let tie = FreeformEntry::empty("c".into(), datetime!(2026-01-02 8:00 UTC));
        let mut entries = vec![older, newer, tie];

        sort_newest_first(&mut entries, |e| (&e.timestamp, &e.id));

        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }
}
