//! Aggregate insights over a schedule table
//!
//! All figures are pure reductions over the table rows. Row-level figures
//! (modes, average duration, busy hour) weight every row equally, so a
//! restaurant with several windows per day counts once per window.

use crate::app::models::{TimeOfDay, WeekDay};
use crate::app::services::schedule_table::ScheduleTable;
use crate::app::services::schedule_table::query::distinct_restaurants;
use crate::constants::HOURS_PER_DAY;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Summary statistics of a schedule table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    /// Number of distinct restaurants
    pub total_restaurants: usize,

    /// Most frequent opening time across all rows
    pub most_common_open_time: Option<TimeOfDay>,

    /// Most frequent closing time across all rows
    pub most_common_close_time: Option<TimeOfDay>,

    /// Mean row duration in hours
    pub average_duration_hours: Option<f64>,

    /// Hour of day (0-23) covered by the most rows
    pub most_busy_hour: Option<u32>,

    /// Distinct restaurants open on Saturday or Sunday
    pub weekend_restaurants: usize,

    pub sat_restaurants: usize,

    pub sun_restaurants: usize,

    /// Restaurants that always open at the same time
    pub consistent_operating_restaurants: usize,
}

impl Insights {
    /// Compute all insights for a table
    ///
    /// Optional figures are `None` for an empty table.
    pub fn compute(table: &ScheduleTable) -> Self {
        Self {
            total_restaurants: table.restaurants().len(),
            most_common_open_time: most_common(table.iter().map(|row| row.open)),
            most_common_close_time: most_common(table.iter().map(|row| row.close)),
            average_duration_hours: average_duration_hours(table),
            most_busy_hour: most_busy_hour(table),
            weekend_restaurants: restaurants_open_on(table, &WeekDay::WEEKEND),
            sat_restaurants: restaurants_open_on(table, &[WeekDay::Sat]),
            sun_restaurants: restaurants_open_on(table, &[WeekDay::Sun]),
            consistent_operating_restaurants: consistent_operating_restaurants(table),
        }
    }
}

/// Mode of a sequence; ties go to the value that appeared first
pub fn most_common<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Copy,
    I: IntoIterator<Item = T>,
{
    // value -> (count, index of first occurrence)
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        counts.entry(value).or_insert((0, index)).0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value)
}

/// Mean of `close - open` in hours over all rows
pub fn average_duration_hours(table: &ScheduleTable) -> Option<f64> {
    if table.is_empty() {
        return None;
    }

    let total: f64 = table.iter().map(|row| row.duration_hours()).sum();
    Some(total / table.len() as f64)
}

/// Number of rows covering each hour of the day
///
/// A row covers hour `h` when `open.hour <= h < close.hour`; partial hours at
/// the closing end are not counted.
pub fn hourly_coverage(table: &ScheduleTable) -> [usize; HOURS_PER_DAY] {
    let mut coverage = [0; HOURS_PER_DAY];
    for row in table {
        for hour in row.open.hour()..row.close.hour() {
            coverage[hour as usize] += 1;
        }
    }
    coverage
}

/// Hour covered by the most rows, lowest hour on ties
///
/// Rows shorter than a whole hour cover nothing, so a table of only such rows
/// ties every hour at zero and yields hour 0.
pub fn most_busy_hour(table: &ScheduleTable) -> Option<u32> {
    if table.is_empty() {
        return None;
    }

    let coverage = hourly_coverage(table);
    let busiest = coverage.iter().copied().max().unwrap_or(0);
    coverage
        .iter()
        .position(|&count| count == busiest)
        .map(|hour| hour as u32)
}

fn restaurants_open_on(table: &ScheduleTable, days: &[WeekDay]) -> usize {
    distinct_restaurants(table.iter().filter(|row| days.contains(&row.day))).len()
}

/// Restaurants whose rows all share a single opening time
pub fn consistent_operating_restaurants(table: &ScheduleTable) -> usize {
    let mut open_times: HashMap<&str, HashSet<TimeOfDay>> = HashMap::new();
    for row in table {
        open_times
            .entry(row.restaurant.as_str())
            .or_default()
            .insert(row.open);
    }

    open_times.values().filter(|times| times.len() == 1).count()
}
