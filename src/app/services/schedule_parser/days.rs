//! Day-range expansion
//!
//! Expands day clauses like `"Mon, Wed-Sun"` or `"Fri-Tue"` into the ordered
//! list of weekdays they denote.

use crate::Result;
use crate::app::models::WeekDay;
use crate::constants::{DAY_LIST_SEPARATOR, DAY_RANGE_SEPARATOR, DAYS_PER_WEEK};

/// Expand a day clause into weekdays in the order they appear
///
/// Comma-separated parts are expanded independently and concatenated, so
/// duplicates are kept and the result is not sorted. A range whose start comes
/// after its end wraps through Sunday ("Sat-Mon" is Sat, Sun, Mon).
///
/// # Errors
///
/// Returns [`crate::Error::UnknownDayToken`] when any part, or either end of a
/// range, is not a three-letter weekday abbreviation.
pub fn extract_days(text: &str) -> Result<Vec<WeekDay>> {
    let mut days = Vec::new();

    for part in text.split(DAY_LIST_SEPARATOR) {
        let part = part.trim();

        match part.split_once(DAY_RANGE_SEPARATOR) {
            Some((start, end)) => {
                let start: WeekDay = start.parse()?;
                let end: WeekDay = end.parse()?;
                days.extend(expand_range(start, end));
            }
            None => days.push(part.parse()?),
        }
    }

    Ok(days)
}

/// Inclusive run of days from `start` to `end`, wrapping past Sunday if needed
pub fn expand_range(start: WeekDay, end: WeekDay) -> Vec<WeekDay> {
    let span = (end.ordinal() + DAYS_PER_WEEK - start.ordinal()) % DAYS_PER_WEEK;

    (0..=span)
        .map(|offset| WeekDay::from_ordinal(start.ordinal() + offset))
        .collect()
}
