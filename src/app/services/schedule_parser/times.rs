//! 12-hour clock time extraction
//!
//! Finds clock times such as `11 am`, `10:30 pm` or `9PM` in loosely
//! formatted text and converts them to [`TimeOfDay`] values.

use crate::app::models::TimeOfDay;
use crate::{Error, Result};
use chrono::NaiveTime;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `<1-2 digits>[:<2 digits>][spaces]<am|pm>`; the hour must start on a word
/// boundary so digits inside longer numbers or words are not picked up.
static TIME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})(?::(\d{2}))?\s*([ap]m)").unwrap());

/// A whole string holding exactly one 12-hour time
static CLOCK_TIME_12H: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(\d{1,2})(?::(\d{2}))?\s*([ap]m)\s*$").unwrap());

/// Half of the day a 12-hour clock time refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Interpret an `am`/`pm` marker, ignoring case
    fn from_marker(marker: &str) -> Self {
        if marker.eq_ignore_ascii_case("pm") {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }
}

/// Extract the (open, close) pair from a time clause
///
/// The first time found is the opening time and the second the closing time;
/// anything after the second is ignored. No ordering is enforced here, so a
/// close earlier than the open is returned as-is for midnight handling.
///
/// # Errors
///
/// - [`Error::MissingTimeRange`] when fewer than two times are present
/// - [`Error::UnparsableTime`] when a time has an out-of-range hour or minute
pub fn extract_time(text: &str) -> Result<(TimeOfDay, TimeOfDay)> {
    let tokens: Vec<Captures<'_>> = TIME_TOKEN.captures_iter(text).take(2).collect();

    match tokens.as_slice() {
        [open, close] => Ok((decode_token(open)?, decode_token(close)?)),
        found => Err(Error::missing_time_range(text.trim(), found.len())),
    }
}

/// Byte offset of the first time token in `text`, if any
pub fn first_time_token_start(text: &str) -> Option<usize> {
    TIME_TOKEN.find(text).map(|token| token.start())
}

/// Convert a 12-hour clock reading to a time of day
///
/// 12 am is midnight and 12 pm is noon. Returns `None` when the hour is
/// outside 1-12 or the minute outside 0-59.
pub fn to_24_hour(hour: u32, minute: u32, meridiem: Meridiem) -> Option<TimeOfDay> {
    if !(1..=12).contains(&hour) {
        return None;
    }

    let hour = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    };

    TimeOfDay::from_hm(hour, minute)
}

/// Parse a single user-supplied clock time
///
/// Accepts 12-hour notation (`11:30 am`, `9 PM`) and 24-hour `HH:MM`.
pub fn parse_clock_time(text: &str) -> Result<TimeOfDay> {
    if let Some(captures) = CLOCK_TIME_12H.captures(text) {
        return decode_token(&captures);
    }

    NaiveTime::parse_from_str(text.trim(), "%H:%M")
        .map(TimeOfDay::from)
        .map_err(|e| Error::unparsable_time(text.trim(), e.to_string()))
}

fn decode_token(captures: &Captures<'_>) -> Result<TimeOfDay> {
    let token = captures.get(0).map_or("", |m| m.as_str()).trim();

    let hour: u32 = captures[1]
        .parse()
        .map_err(|e| Error::unparsable_time(token, format!("invalid hour ({})", e)))?;

    let minute: u32 = match captures.get(2) {
        Some(minutes) => minutes
            .as_str()
            .parse()
            .map_err(|e| Error::unparsable_time(token, format!("invalid minutes ({})", e)))?,
        None => 0,
    };

    let meridiem = Meridiem::from_marker(&captures[3]);

    to_24_hour(hour, minute, meridiem).ok_or_else(|| {
        Error::unparsable_time(
            token,
            format!("{}:{:02} is not a valid 12-hour clock time", hour, minute),
        )
    })
}
