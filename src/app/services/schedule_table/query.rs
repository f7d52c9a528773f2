//! Schedule lookup functionality
//!
//! This module provides the read-only queries over a built [`ScheduleTable`]:
//! which restaurants are open at a given moment, and the full timing listing
//! for selected restaurants.

use super::ScheduleTable;
use crate::app::models::{ScheduleInterval, TimeOfDay, WeekDay};
use serde::Serialize;
use std::collections::HashSet;

/// Formatted timings of one restaurant, in table row order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantTimings {
    pub restaurant: String,
    /// `"<day>: <open> - <close>"` strings
    pub timings: Vec<String>,
}

impl ScheduleTable {
    /// Find restaurants open on a day, optionally at a specific time
    ///
    /// A row qualifies when its day matches and, if `time` is given,
    /// `open <= time <= close`. Names are returned once each, in the order
    /// they first appear in the table.
    ///
    /// # Examples
    /// ```
    /// # use restaurant_hours::{RestaurantEntry, ScheduleTable, TimeOfDay, WeekDay};
    /// let entries = [RestaurantEntry::new("A-1 Cafe Restaurant", "Mon 11 am - 10 pm")];
    /// let table = ScheduleTable::from_entries(&entries).unwrap();
    ///
    /// let closing = TimeOfDay::from_hm(22, 0).unwrap();
    /// assert_eq!(table.open_at(WeekDay::Mon, Some(closing)), vec!["A-1 Cafe Restaurant"]);
    /// assert!(table.open_at(WeekDay::Tue, None).is_empty());
    /// ```
    pub fn open_at(&self, day: WeekDay, time: Option<TimeOfDay>) -> Vec<&str> {
        distinct_restaurants(
            self.rows
                .iter()
                .filter(|row| row.day == day && time.is_none_or(|t| row.covers(t))),
        )
    }

    /// Timing listings for the requested restaurants
    ///
    /// One entry per requested name, in request order; a name requested more
    /// than once is reported once. Timings follow table row order and are
    /// neither sorted nor deduplicated. Unknown names get an empty list.
    pub fn timings_for<S: AsRef<str>>(&self, names: &[S]) -> Vec<RestaurantTimings> {
        let mut seen = HashSet::new();

        names
            .iter()
            .map(|name| name.as_ref())
            .filter(|name| seen.insert(*name))
            .map(|name| RestaurantTimings {
                restaurant: name.to_string(),
                timings: self.rows_for(name).map(ScheduleInterval::timing).collect(),
            })
            .collect()
    }

    /// Distinct restaurant names in first-seen order
    pub fn restaurants(&self) -> Vec<&str> {
        distinct_restaurants(self.rows.iter())
    }

    /// Rows of one restaurant in table order
    pub fn rows_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ScheduleInterval> {
        self.rows.iter().filter(move |row| row.restaurant == name)
    }
}

/// Order-preserving distinct restaurant names over a row sequence
pub(crate) fn distinct_restaurants<'a, I>(rows: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a ScheduleInterval>,
{
    let mut seen = HashSet::new();
    rows.into_iter()
        .map(|row| row.restaurant.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}
