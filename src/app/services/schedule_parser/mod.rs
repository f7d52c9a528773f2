//! Free-text schedule parser for restaurant opening hours
//!
//! This module turns one raw schedule string such as
//! `"Mon-Fri 11:30 am - 10 pm / Sat 5:30 pm - 10 pm"` into normalized
//! [`ScheduleInterval`] rows.
//!
//! ## Architecture
//!
//! The parser is organized into small pure components:
//! - [`days`] - Day-range expansion with week wrap-around ("Fri-Mon")
//! - [`times`] - 12-hour clock time extraction from loose text
//! - [`segment`] - Splitting a `/`-separated segment into day and time clauses
//! - [`normalizer`] - Midnight splitting of windows that close the next day
//!
//! ## Usage
//!
//! ```rust
//! use restaurant_hours::app::services::schedule_parser::parse_entry;
//! use restaurant_hours::RestaurantEntry;
//!
//! let entry = RestaurantEntry::new("Thai Stick Restaurant", "Mon 11 am - 1 am");
//! let parsed = parse_entry(&entry).unwrap();
//!
//! // 11 am Monday to 1 am Tuesday becomes two rows
//! assert_eq!(parsed.rows.len(), 2);
//! assert_eq!(parsed.midnight_splits, 1);
//! ```

pub mod days;
pub mod normalizer;
pub mod segment;
pub mod times;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use days::{expand_range, extract_days};
pub use normalizer::{NormalizedInterval, normalize_interval};
pub use segment::{ScheduleSegment, split_segment, split_segments};
pub use times::{extract_time, parse_clock_time};

use crate::Result;
use crate::app::models::{RestaurantEntry, ScheduleInterval};
use tracing::trace;

/// Rows produced from a single restaurant entry
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    /// Normalized rows in production order
    pub rows: Vec<ScheduleInterval>,

    /// Number of day windows that crossed midnight and were split in two
    pub midnight_splits: usize,
}

/// Parse every segment of one entry into normalized rows
///
/// The entry either parses completely or fails with the first error found;
/// no partial row list is ever returned.
pub fn parse_entry(entry: &RestaurantEntry) -> Result<ParsedEntry> {
    let restaurant = entry.name.trim();
    let mut rows = Vec::new();
    let mut midnight_splits = 0;

    for raw_segment in split_segments(&entry.schedule) {
        let segment = split_segment(raw_segment)?;
        let (open, close) = extract_time(segment.time_clause)?;
        let days = extract_days(segment.day_clause)?;

        trace!(
            "Segment '{}' -> days {:?}, {} to {}",
            raw_segment.trim(),
            days,
            open,
            close
        );

        for day in days {
            let normalized = normalize_interval(restaurant, day, open, close);
            if normalized.is_split() {
                midnight_splits += 1;
            }
            rows.extend(normalized);
        }
    }

    Ok(ParsedEntry {
        rows,
        midnight_splits,
    })
}
