//! Static translation tables.
//!
//! Every user-facing string lives here, one table per [`Language`]. Date
//! layout differs per locale, so each table also carries the function that
//! assembles a display date from its parts.

mod en;
mod es;

use serde::Serialize;

use crate::domain::Language;

pub use en::EN;
pub use es::ES;

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub common: CommonStrings,
    pub auth: AuthStrings,
    pub nav: NavStrings,
    pub greeting: GreetingStrings,
    pub exercises: ExerciseStrings,
    pub time: TimeStrings,
    pub two_flags: TwoFlagsStrings,
    pub freeform: FreeformStrings,
    pub theme: ThemeStrings,
    pub messages: MessageStrings,
    pub language: LanguageStrings,
    pub marquee: MarqueeStrings,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonStrings {
    pub cancel: &'static str,
    pub delete: &'static str,
    pub edit: &'static str,
    pub click_to_edit: &'static str,
    pub add_prefix: &'static str,
    pub loading: &'static str,
}

impl CommonStrings {
    /// Label for an "add item" button, e.g. `Add stardust`.
    pub fn add(&self, label: &str) -> String {
        format!("{} {}", self.add_prefix, label.to_lowercase())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStrings {
    pub subtitle: &'static str,
    pub app_name: &'static str,
    pub tagline: &'static str,
    pub sign_in: &'static str,
    pub session_info: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavStrings {
    pub logout: &'static str,
    pub show_guide: &'static str,
    pub hide_guide: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingStrings {
    pub morning: &'static str,
    pub afternoon: &'static str,
    pub evening: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseStrings {
    pub two_flags: TwoFlagsExerciseStrings,
    pub significant_bond: FreeformExerciseStrings,
    pub idealized_expectations: FreeformExerciseStrings,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFlagsExerciseStrings {
    pub name: &'static str,
    pub icon: &'static str,
    pub guide: TwoFlagsGuideStrings,
    pub add_label: &'static str,
    pub empty_message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFlagsGuideStrings {
    pub section1_label: &'static str,
    pub section1_desc: &'static str,
    pub section2_label: &'static str,
    pub section2_desc: &'static str,
    pub instruction: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeformExerciseStrings {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub questions: &'static str,
    pub add_label: &'static str,
    pub empty_message: &'static str,
}

/// Parts handed to a locale's date assembly function.
#[derive(Debug, Clone, Copy)]
pub struct DateParts<'a> {
    pub prefix: &'a str,
    pub weekday: &'a str,
    pub day: u8,
    pub month: &'a str,
    pub year: i32,
    pub time: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeStrings {
    pub today: &'static str,
    pub yesterday: &'static str,
    /// Weekday names starting with Sunday.
    pub days: [&'static str; 7],
    pub months: [&'static str; 12],
    #[serde(skip)]
    pub date_format: fn(&DateParts<'_>) -> String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFlagsStrings {
    pub new_record: &'static str,
    pub date_time_label: &'static str,
    pub section1_label: &'static str,
    pub section1_placeholder: &'static str,
    pub section2_label: &'static str,
    pub section2_placeholder: &'static str,
    pub learning_label: &'static str,
    pub learning_placeholder: &'static str,
    pub delete_record: &'static str,
    pub delete_record_confirm: &'static str,
    pub delete_item_confirm: &'static str,
    pub no_records: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeformStrings {
    pub instruction_label: &'static str,
    pub questions_label: &'static str,
    pub date_label: &'static str,
    pub title_placeholder: &'static str,
    pub content_placeholder: &'static str,
    pub no_title: &'static str,
    pub delete_entry: &'static str,
    pub delete_entry_confirm: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStrings {
    pub light: &'static str,
    pub dark: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStrings {
    pub no_hurry: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStrings {
    pub toggle: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarqueeStrings {
    pub journal: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_label_lowercases_the_section_name() {
        assert_eq!(ES.common.add("Polvo de Estrellas"), "Agregar polvo de estrellas");
        assert_eq!(EN.common.add("The Tangle"), "Add the tangle");
    }

    #[test]
    fn date_assembly_follows_locale_field_order() {
        let parts = DateParts {
            prefix: "",
            weekday: "X",
            day: 15,
            month: "M",
            year: 2026,
            time: "2:30pm",
        };

        assert_eq!((ES.time.date_format)(&parts), "X 15 de M, 2026 — 2:30pm");
        assert_eq!((EN.time.date_format)(&parts), "X M 15, 2026 — 2:30pm");
    }

    #[test]
    fn language_selects_its_table() {
        assert_eq!(translations(Language::Es).freeform.no_title, "Sin titulo");
        assert_eq!(translations(Language::En).freeform.no_title, "Untitled");
        assert_eq!(translations(Language::En).auth.app_name, "Estela");
    }

    #[test]
    fn serialized_table_omits_the_date_function() {
        let json = serde_json::to_value(&EN).unwrap();
        assert_eq!(json["time"]["today"], "Today");
        assert!(json["time"].get("dateFormat").is_none());
        assert_eq!(json["twoFlags"]["section1Label"], "Stardust");
    }
}
