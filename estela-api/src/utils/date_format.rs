//! Locale-aware rendering of entry timestamps.
//!
//! The user's zone is a fixed [`UtcOffset`] reported by the client, so every
//! calendar computation here goes through a [`LocalClock`].

use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};

use crate::i18n::{DateParts, Translations};

const EDITABLE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

#[derive(Debug, thiserror::Error)]
pub enum DateFormatError {
    #[error("invalid local date-time {input:?}: {source}")]
    InvalidEditable {
        input: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("invalid UTC offset of {0} minutes")]
    InvalidOffset(i32),
}

/// "Now" pinned to the user's local offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalClock {
    now: OffsetDateTime,
    offset: UtcOffset,
}

impl LocalClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self::fixed(OffsetDateTime::now_utc(), offset)
    }

    /// A clock that always reports `now`, for tests and replays.
    pub fn fixed(now: OffsetDateTime, offset: UtcOffset) -> Self {
        Self {
            now: now.to_offset(offset),
            offset,
        }
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    pub fn today(&self) -> Date {
        self.now.date()
    }

    pub fn hour(&self) -> u8 {
        self.now.hour()
    }
}

/// Converts a client-reported offset in minutes east of UTC.
pub fn offset_from_minutes(minutes: i32) -> Result<UtcOffset, DateFormatError> {
    minutes
        .checked_mul(60)
        .and_then(|seconds| UtcOffset::from_whole_seconds(seconds).ok())
        .ok_or(DateFormatError::InvalidOffset(minutes))
}

/// `Today — Monday January 15, 2026 — 2:30pm` and its Spanish counterpart.
pub fn to_display_string(
    timestamp: OffsetDateTime,
    clock: &LocalClock,
    translations: &Translations,
) -> String {
    let local = timestamp.to_offset(clock.offset());
    let strings = &translations.time;

    let prefix = match (clock.today() - local.date()).whole_days() {
        0 => format!("{} — ", strings.today),
        1 => format!("{} — ", strings.yesterday),
        _ => String::new(),
    };
    let time = twelve_hour_time(local.hour(), local.minute());

    let parts = DateParts {
        prefix: &prefix,
        weekday: strings.days[local.weekday().number_days_from_sunday() as usize],
        day: local.day(),
        month: strings.months[usize::from(u8::from(local.month())) - 1],
        year: local.year(),
        time: &time,
    };

    (strings.date_format)(&parts)
}

fn twelve_hour_time(hour: u8, minute: u8) -> String {
    let suffix = if hour < 12 { "am" } else { "pm" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{minute:02}{suffix}")
}

/// Zero-padded `YYYY-MM-DDTHH:MM` in the given offset, as used by
/// `datetime-local` inputs.
pub fn to_editable_local_string(timestamp: OffsetDateTime, offset: UtcOffset) -> String {
    let local = timestamp.to_offset(offset);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}",
        local.year(),
        u8::from(local.month()),
        local.day(),
        local.hour(),
        local.minute()
    )
}

/// Inverse of [`to_editable_local_string`]: reads local wall time in
/// `offset`.
pub fn parse_editable_local_string(
    input: &str,
    offset: UtcOffset,
) -> Result<OffsetDateTime, DateFormatError> {
    let local = PrimitiveDateTime::parse(input.trim(), EDITABLE_FORMAT).map_err(|source| {
        DateFormatError::InvalidEditable {
            input: input.to_string(),
            source,
        }
    })?;

    Ok(local.assume_offset(offset))
}

#[cfg(test)]
mod tests {
    use time::macros::{datetime, offset};

    use super::*;
    use crate::i18n::{EN, ES};

    fn clock_at(now: OffsetDateTime) -> LocalClock {
        LocalClock::fixed(now, offset!(UTC))
    }

    #[test]
    fn same_calendar_day_gets_today_prefix() {
        let clock = clock_at(datetime!(2026-01-15 23:50 UTC));
        let rendered = to_display_string(datetime!(2026-01-15 0:05 UTC), &clock, &EN);

        assert_eq!(rendered, "Today — Thursday January 15, 2026 — 12:05am");
    }

    #[test]
    fn previous_calendar_day_gets_yesterday_prefix_even_within_24_hours() {
        let clock = clock_at(datetime!(2026-01-15 0:10 UTC));
        let rendered = to_display_string(datetime!(2026-01-14 23:55 UTC), &clock, &ES);

        assert_eq!(rendered, "Ayer — Miercoles 14 de enero, 2026 — 11:55pm");
    }

    #[test]
    fn two_days_back_has_no_prefix() {
        let clock = clock_at(datetime!(2026-01-15 9:00 UTC));
        let rendered = to_display_string(datetime!(2026-01-13 14:30 UTC), &clock, &EN);

        assert_eq!(rendered, "Tuesday January 13, 2026 — 2:30pm");
    }

    #[test]
    fn noon_and_midnight_use_twelve() {
        assert_eq!(twelve_hour_time(12, 0), "12:00pm");
        assert_eq!(twelve_hour_time(0, 0), "12:00am");
        assert_eq!(twelve_hour_time(9, 5), "9:05am");
        assert_eq!(twelve_hour_time(21, 7), "9:07pm");
    }

    #[test]
    fn display_uses_the_clock_offset_for_the_calendar_day() {
        let clock = LocalClock::fixed(datetime!(2026-03-02 4:00 UTC), offset!(-5));
        // 2026-03-02 02:00 UTC is 21:00 on March 1st at UTC-5, today locally.
        let rendered = to_display_string(datetime!(2026-03-02 2:00 UTC), &clock, &EN);

        assert_eq!(rendered, "Today — Sunday March 1, 2026 — 9:00pm");
    }

    #[test]
    fn editable_string_is_zero_padded_local_time() {
        let rendered = to_editable_local_string(datetime!(2026-02-03 7:04 UTC), offset!(+1));
        assert_eq!(rendered, "2026-02-03T08:04");
    }

    #[test]
    fn editable_round_trip_keeps_minute_precision() {
        let offset = offset!(-3);
        let original = datetime!(2026-07-09 18:41:37 UTC);

        let editable = to_editable_local_string(original, offset);
        let parsed = parse_editable_local_string(&editable, offset).unwrap();

        assert_eq!(parsed, datetime!(2026-07-09 18:41 UTC));
        assert_eq!(to_editable_local_string(parsed, offset), editable);
    }

    #[test]
    fn malformed_editable_input_is_rejected() {
        for input in ["", "2026-13-01T10:00", "yesterday", "2026-01-01 10:00"] {
            let result = parse_editable_local_string(input, offset!(UTC));
            assert!(
                matches!(result, Err(DateFormatError::InvalidEditable { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn offset_minutes_are_range_checked() {
        assert_eq!(offset_from_minutes(-300).unwrap(), offset!(-5));
        assert_eq!(offset_from_minutes(330).unwrap(), offset!(+5:30));
        assert!(offset_from_minutes(60 * 30).is_err());
    }
}
