use std::{collections::HashMap, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::i18n::{self, Translations};

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Key-value persistence for user preferences.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The active language and theme, read once per request or session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    /// Reads both preferences, falling back to the default for absent or
    /// unrecognized values.
    pub fn load(storage: &impl PreferenceStorage) -> Self {
        Self {
            language: read_or_default(storage, LANGUAGE_KEY),
            theme: read_or_default(storage, THEME_KEY),
        }
    }

    pub fn toggle_language(&mut self, storage: &mut impl PreferenceStorage) -> Language {
        self.language = self.language.toggled();
        storage.set(LANGUAGE_KEY, &self.language.to_string());
        tracing::debug!(language = %self.language, "language toggled");
        self.language
    }

    pub fn toggle_theme(&mut self, storage: &mut impl PreferenceStorage) -> Theme {
        self.theme = self.theme.toggled();
        storage.set(THEME_KEY, &self.theme.to_string());
        tracing::debug!(theme = %self.theme, "theme toggled");
        self.theme
    }

    pub fn translations(&self) -> &'static Translations {
        i18n::translations(self.language)
    }
}

fn read_or_default<T: FromStr + Default>(storage: &impl PreferenceStorage, key: &str) -> T {
    storage
        .get(key)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// In-process storage, used by tests and by sessions without a cookie jar.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStorage {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryPreferenceStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
