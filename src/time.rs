// Time-related operations.
use ::time::{
    format_description::BorrowedFormatItem,
    macros::format_description,
    Date, Time, Weekday
};

// Use this format for formatting and parsing dates.
static DB_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

// Kick-off times travel through the app as HH:MM strings.
static TIME_SLOT_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

// Convert a Date object to database string.
pub fn date_to_db_string(date: &Date) -> String {
    date.format(&DB_DATE_FORMAT).unwrap()
}

pub fn db_string_to_date(date: &str) -> Date {
    Date::parse(date, DB_DATE_FORMAT).unwrap()
}

// Parse an HH:MM string into a Time object.
pub fn parse_time_slot(slot: &str) -> Result<Time, ::time::error::Parse> {
    Time::parse(slot, TIME_SLOT_FORMAT)
}

// Format a Time object back into an HH:MM string.
pub fn format_time_slot(time: &Time) -> String {
    time.format(&TIME_SLOT_FORMAT).unwrap()
}

// Map a settings-form weekday index (0 = Sunday .. 6 = Saturday) to a Weekday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sunday),
        1 => Some(Weekday::Monday),
        2 => Some(Weekday::Tuesday),
        3 => Some(Weekday::Wednesday),
        4 => Some(Weekday::Thursday),
        5 => Some(Weekday::Friday),
        6 => Some(Weekday::Saturday),
        _ => None,
    }
}
