//! Normalized schedule table
//!
//! This module holds the flat, ordered table of [`ScheduleInterval`] rows built
//! from restaurant entries, together with the queries that run over it.
//!
//! # Architecture
//!
//! - [`builder`] - One-shot table construction with strict or permissive error handling
//! - [`query`] - Point-in-time openness lookup and per-restaurant timing listings
//! - [`stats`] - Build statistics and skipped-entry reporting
//!
//! # Lifecycle
//!
//! A table is built once and never mutated afterwards. Rows keep the order in
//! which they were produced, so the two halves of a midnight split and multiple
//! windows on the same day stay adjacent exactly as parsed. Re-parsing the
//! input produces a new table.
//!
//! # Example Usage
//!
//! ```rust
//! use restaurant_hours::{RestaurantEntry, ScheduleTable, TimeOfDay, WeekDay};
//!
//! let entries = vec![
//!     RestaurantEntry::new("A-1 Cafe Restaurant", "Mon, Wed-Sun 11 am - 10 pm"),
//!     RestaurantEntry::new("Thai Stick Restaurant", "Mon-Sun 11 am - 1 am"),
//! ];
//! let table = ScheduleTable::from_entries(&entries).unwrap();
//!
//! let late = TimeOfDay::from_hm(0, 30).unwrap();
//! assert_eq!(table.open_at(WeekDay::Tue, Some(late)), vec!["Thai Stick Restaurant"]);
//! ```

pub mod builder;
pub mod query;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::BuildMode;
pub use query::RestaurantTimings;
pub use stats::{BuildResult, BuildStats, SkippedEntry};

use crate::app::models::ScheduleInterval;
use serde::Serialize;

/// Ordered, read-only collection of normalized schedule rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleTable {
    rows: Vec<ScheduleInterval>,
}

impl ScheduleTable {
    /// All rows in build order
    pub fn rows(&self) -> &[ScheduleInterval] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleInterval> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Table over pre-normalized rows, bypassing parsing
    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<ScheduleInterval>) -> Self {
        Self { rows }
    }
}

impl<'a> IntoIterator for &'a ScheduleTable {
    type Item = &'a ScheduleInterval;
    type IntoIter = std::slice::Iter<'a, ScheduleInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
