//! Build statistics and result structures for schedule table construction
//!
//! This module provides types for tracking how many entries were parsed,
//! how many rows they produced, and which entries were skipped and why.

use super::ScheduleTable;
use crate::Error;
use crate::app::models::RestaurantEntry;

/// An entry left out of a permissive build, with the failure that caused it
#[derive(Debug)]
pub struct SkippedEntry {
    /// Restaurant name (trimmed)
    pub restaurant: String,
    /// Raw schedule text as supplied
    pub schedule: String,
    /// Parse failure
    pub error: Error,
}

impl SkippedEntry {
    pub fn new(entry: &RestaurantEntry, error: Error) -> Self {
        Self {
            restaurant: entry.name.trim().to_string(),
            schedule: entry.schedule.clone(),
            error,
        }
    }
}

/// Statistics for one table build
#[derive(Debug, Default)]
pub struct BuildStats {
    /// Number of input entries encountered
    pub entries_seen: usize,
    /// Number of entries that parsed and contributed rows
    pub entries_built: usize,
    /// Total rows in the finished table
    pub rows_emitted: usize,
    /// Number of day windows split at midnight
    pub midnight_splits: usize,
    /// Entries skipped in permissive mode
    pub skipped: Vec<SkippedEntry>,
}

impl BuildStats {
    /// Create new empty build statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped entry
    pub fn add_skipped(&mut self, skipped: SkippedEntry) {
        self.skipped.push(skipped);
    }

    pub fn entries_skipped(&self) -> usize {
        self.skipped.len()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.entries_seen == 0 {
            100.0
        } else {
            (self.entries_built as f64 / self.entries_seen as f64) * 100.0
        }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Build Summary: {} entries -> {} rows ({:.1}% parsed) | \
             Midnight splits: {} | Skipped: {}",
            self.entries_seen,
            self.rows_emitted,
            self.success_rate(),
            self.midnight_splits,
            self.entries_skipped()
        )
    }
}

/// Result of a table build
#[derive(Debug)]
pub struct BuildResult {
    /// The finished table
    pub table: ScheduleTable,
    /// Build statistics, including any skipped entries
    pub stats: BuildStats,
}

impl BuildResult {
    pub fn new(table: ScheduleTable, stats: BuildStats) -> Self {
        Self { table, stats }
    }

    /// True when every entry made it into the table
    pub fn is_complete(&self) -> bool {
        self.stats.skipped.is_empty()
    }
}
