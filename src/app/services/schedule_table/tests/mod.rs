//! Tests for the schedule table module
//!
//! Unit tests for table construction, queries and build statistics.

pub mod builder_tests;
pub mod query_tests;

use crate::app::models::{RestaurantEntry, ScheduleInterval, TimeOfDay, WeekDay};
use crate::app::services::schedule_table::ScheduleTable;

/// Shorthand for building a time of day in tests
pub fn hm(hour: u32, minute: u32) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).unwrap()
}

/// Create a schedule row for testing purposes
pub fn create_test_row(
    restaurant: &str,
    day: WeekDay,
    open: TimeOfDay,
    close: TimeOfDay,
) -> ScheduleInterval {
    ScheduleInterval::new(restaurant, day, open, close)
}

/// Sample entries covering day lists, multiple windows and midnight crossings
pub fn create_sample_entries() -> Vec<RestaurantEntry> {
    vec![
        RestaurantEntry::new("A-1 Cafe Restaurant", "Mon, Wed-Sun 11 am - 10 pm"),
        RestaurantEntry::new("Nick's Lighthouse", "Mon-Sun 11 am - 10:30 pm"),
        RestaurantEntry::new(
            "Paragon Restaurant & Bar",
            "Mon-Fri 11:30 am - 10 pm  / Sat 5:30 pm - 10 pm",
        ),
        RestaurantEntry::new(
            "Chili Lemon Garlic",
            "Mon-Fri 11 am - 10 pm  / Sat-Sun 5 pm - 10 pm",
        ),
        RestaurantEntry::new("Bow Hon Restaurant", "Mon-Sun 11 am - 10:30 pm"),
        RestaurantEntry::new("San Dong House", "Mon-Sun 11 am - 11 pm"),
        RestaurantEntry::new("Thai Stick Restaurant", "Mon-Sun 11 am - 1 am"),
        RestaurantEntry::new(
            "Jayce's night club",
            "Mon 7 am - 12 am / Tue 7 am - 12 am / Sun 9 AM - 9 PM",
        ),
    ]
}

/// Pre-normalized table mirroring a Mon-Tue 11 am - 1 am schedule
///
/// A-1 Cafe Restaurant   Mon 11 am - 10 pm
/// Nick's Lighthouse     Mon-Tue 11 am - 1 am
pub fn create_lighthouse_table() -> ScheduleTable {
    ScheduleTable::from_rows(vec![
        create_test_row("A-1 Cafe Restaurant", WeekDay::Mon, hm(11, 0), hm(22, 0)),
        create_test_row("Nick's Lighthouse", WeekDay::Mon, hm(11, 0), hm(23, 59)),
        create_test_row("Nick's Lighthouse", WeekDay::Tue, hm(0, 0), hm(1, 0)),
        create_test_row("Nick's Lighthouse", WeekDay::Tue, hm(11, 0), hm(23, 59)),
        create_test_row("Nick's Lighthouse", WeekDay::Wed, hm(0, 0), hm(1, 0)),
    ])
}
