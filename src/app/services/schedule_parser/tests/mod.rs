//! Tests for the schedule parser module
//!
//! Unit tests for day-range expansion, time extraction, segment splitting,
//! midnight normalization and whole-entry parsing.


use crate::app::models::{TimeOfDay, WeekDay};

/// Shorthand for building a time of day in tests
pub fn hm(hour: u32, minute: u32) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).unwrap()
}

/// Every weekday from Monday through Friday
pub fn weekdays() -> Vec<WeekDay> {
    vec![
        WeekDay::Mon,
        WeekDay::Tue,
        WeekDay::Wed,
        WeekDay::Thu,
        WeekDay::Fri,
    ]
}
