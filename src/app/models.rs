//! Data models for restaurant schedule processing
//!
//! This module contains the core value types: canonical weekdays with cyclic
//! ordering, minute-resolution wall-clock times, normalized schedule intervals
//! and the raw (restaurant, schedule text) input pairs they are built from.

use crate::constants::{
    DAY_ABBREVIATIONS, DAYS_PER_WEEK, END_OF_DAY_MINUTES, MINUTES_PER_HOUR, TIMING_SEPARATOR,
};
use crate::{Error, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Weekday
// =============================================================================

/// One of the seven canonical weekdays, ordered Mon (0) through Sun (6)
///
/// Ordering is only meaningful within a single weekly cycle. Anything that
/// crosses the week boundary (day ranges like "Sat-Mon", the day after Sunday)
/// goes through [`WeekDay::from_ordinal`], which wraps modulo 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeekDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl WeekDay {
    /// All weekdays in ordinal order
    pub const ALL: [WeekDay; DAYS_PER_WEEK] = [
        WeekDay::Mon,
        WeekDay::Tue,
        WeekDay::Wed,
        WeekDay::Thu,
        WeekDay::Fri,
        WeekDay::Sat,
        WeekDay::Sun,
    ];

    /// Weekend days used by the insights aggregator
    pub const WEEKEND: [WeekDay; 2] = [WeekDay::Sat, WeekDay::Sun];

    /// Ordinal position in the week (Mon = 0 ... Sun = 6)
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Weekday for an ordinal, wrapping around the week
    pub fn from_ordinal(ordinal: usize) -> Self {
        Self::ALL[ordinal % DAYS_PER_WEEK]
    }

    /// Next day in the weekly cycle (Sun wraps to Mon)
    pub fn succ(self) -> Self {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// Canonical three-letter abbreviation
    pub fn abbreviation(self) -> &'static str {
        DAY_ABBREVIATIONS[self.ordinal()]
    }

    pub fn is_weekend(self) -> bool {
        Self::WEEKEND.contains(&self)
    }
}

impl FromStr for WeekDay {
    type Err = Error;

    /// Parse a three-letter abbreviation, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        DAY_ABBREVIATIONS
            .iter()
            .position(|abbreviation| abbreviation.eq_ignore_ascii_case(token))
            .map(Self::from_ordinal)
            .ok_or_else(|| Error::unknown_day_token(token))
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

// =============================================================================
// Time of Day
// =============================================================================

/// Wall-clock time with minute resolution in the range [00:00, 23:59]
///
/// Stored as minutes since midnight so ordering and duration arithmetic are
/// plain integer operations. Displays in 12-hour form, e.g. `11:00 AM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// 00:00
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// 23:59
    pub const END_OF_DAY: TimeOfDay = TimeOfDay {
        minutes: END_OF_DAY_MINUTES,
    };

    /// Create a time from a 24-hour clock hour and minute
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < u32::from(MINUTES_PER_HOUR) {
            Some(Self {
                minutes: (hour * u32::from(MINUTES_PER_HOUR) + minute) as u16,
            })
        } else {
            None
        }
    }

    /// Hour on the 24-hour clock (0-23)
    pub fn hour(self) -> u32 {
        u32::from(self.minutes / MINUTES_PER_HOUR)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.minutes % MINUTES_PER_HOUR)
    }

    pub fn minutes_since_midnight(self) -> u32 {
        u32::from(self.minutes)
    }

    /// Render as a 24-hour `HH:MM` string
    pub fn to_24_hour_string(self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates seconds and sub-second precision
    fn from(time: NaiveTime) -> Self {
        Self {
            minutes: (time.hour() * u32::from(MINUTES_PER_HOUR) + time.minute()) as u16,
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Accepts 12-hour (`11:30 am`, `9 PM`) and 24-hour (`23:15`) notation
    fn from_str(s: &str) -> Result<Self> {
        crate::app::services::schedule_parser::times::parse_clock_time(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.hour();
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        let clock_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{:02}:{:02} {}", clock_hour, self.minute(), meridiem)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Schedule Rows
// =============================================================================

/// One normalized opening window of a restaurant on a single weekday
///
/// Once built by the schedule table, `open <= close` always holds: windows
/// that cross midnight are stored as two rows on consecutive days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleInterval {
    /// Restaurant name (trimmed)
    pub restaurant: String,

    /// Day this window applies to
    pub day: WeekDay,

    /// Opening time
    pub open: TimeOfDay,

    /// Closing time (inclusive)
    pub close: TimeOfDay,
}

impl ScheduleInterval {
    pub fn new(restaurant: impl Into<String>, day: WeekDay, open: TimeOfDay, close: TimeOfDay) -> Self {
        Self {
            restaurant: restaurant.into(),
            day,
            open,
            close,
        }
    }

    /// True when `time` falls within the window, both boundaries included
    pub fn covers(&self, time: TimeOfDay) -> bool {
        self.open <= time && time <= self.close
    }

    /// Length of the window in minutes
    pub fn duration_minutes(&self) -> u32 {
        self.close
            .minutes_since_midnight()
            .saturating_sub(self.open.minutes_since_midnight())
    }

    /// Length of the window in fractional hours
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes()) / f64::from(MINUTES_PER_HOUR)
    }

    /// Format as `"<day>: <open> - <close>"`, e.g. `Mon: 11:00 AM - 10:00 PM`
    pub fn timing(&self) -> String {
        format!("{}: {}{}{}", self.day, self.open, TIMING_SEPARATOR, self.close)
    }
}

/// Raw input pair: a restaurant name and its free-text schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantEntry {
    pub name: String,
    pub schedule: String,
}

impl RestaurantEntry {
    pub fn new(name: impl Into<String>, schedule: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schedule: schedule.into(),
        }
    }
}

impl From<(&str, &str)> for RestaurantEntry {
    fn from((name, schedule): (&str, &str)) -> Self {
        Self::new(name, schedule)
    }
}

impl From<(String, String)> for RestaurantEntry {
    fn from((name, schedule): (String, String)) -> Self {
        Self { name, schedule }
    }
}
