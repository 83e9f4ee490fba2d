use chrono::{Datelike, Duration, NaiveDate};

pub const DAYS: [&str; 5] = ["Lunedì", "Martedì", "Mercoledì", "Giovedì", "Venerdì"];

/// Monday of the displayed week. Weeks start on Sunday, so a Sunday already
/// belongs to the week of the following Monday.
pub fn week_anchor(date: NaiveDate) -> NaiveDate {
    let sunday = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
    sunday + Duration::days(1)
}

/// Calendar date of a 1-based school day within the week.
pub fn day_date(anchor: NaiveDate, day: u8) -> NaiveDate {
    anchor + Duration::days(i64::from(day.saturating_sub(1)))
}

/// `Lunedì 14/10` style header for each day of the week, flagging today.
pub fn day_labels(anchor: NaiveDate, today: NaiveDate) -> Vec<(String, bool)> {
    DAYS.iter()
        .zip(1u8..)
        .map(|(name, day)| {
            let date = day_date(anchor, day);
            (
                format!("{} {}/{}", name, date.day(), date.month()),
                date == today,
            )
        })
        .collect()
}
