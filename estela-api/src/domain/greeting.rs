use serde::Serialize;

use crate::{i18n::Translations, utils::date_format::LocalClock};

use super::Identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            0..=11 => DayPeriod::Morning,
            12..=17 => DayPeriod::Afternoon,
            _ => DayPeriod::Evening,
        }
    }
}

/// `Good afternoon, Ana`, or just the salutation without a display name.
pub fn greeting(identity: &Identity, clock: &LocalClock, translations: &Translations) -> String {
    let strings = &translations.greeting;
    let salutation = match DayPeriod::from_hour(clock.hour()) {
        DayPeriod::Morning => strings.morning,
        DayPeriod::Afternoon => strings.afternoon,
        DayPeriod::Evening => strings.evening,
    };

    match identity.first_name() {
        Some(name) => format!("{salutation}, {name}"),
        None => salutation.to_string(),
    }
}
