//! Schedule table construction
//!
//! Runs every restaurant entry through the schedule parser and collects the
//! resulting rows into a [`ScheduleTable`].

use super::ScheduleTable;
use super::stats::{BuildResult, BuildStats, SkippedEntry};
use crate::Result;
use crate::app::models::RestaurantEntry;
use crate::app::services::schedule_parser::parse_entry;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// How the builder reacts to an entry that fails to parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Abort the whole build on the first failure
    #[default]
    Strict,
    /// Skip failing entries, recording each failure in the build statistics
    Permissive,
}

impl ScheduleTable {
    /// Build a table from restaurant entries
    ///
    /// Entries are processed in order and their rows appended in the order the
    /// parser produced them, so identical input always yields an identical
    /// table. An entry contributes either all of its rows or none.
    ///
    /// # Arguments
    ///
    /// * `entries` - Restaurant name and raw schedule pairs
    /// * `mode` - Whether a parse failure aborts the build or skips the entry
    ///
    /// # Errors
    ///
    /// In [`BuildMode::Strict`] the first parse failure is returned unchanged.
    /// [`BuildMode::Permissive`] never fails; skipped entries are listed in
    /// [`BuildStats::skipped`].
    pub fn build<'a, I>(entries: I, mode: BuildMode) -> Result<BuildResult>
    where
        I: IntoIterator<Item = &'a RestaurantEntry>,
    {
        let mut rows = Vec::new();
        let mut stats = BuildStats::new();

        for entry in entries {
            stats.entries_seen += 1;
            debug!("Building {} {}", entry.name.trim(), entry.schedule);

            match parse_entry(entry) {
                Ok(parsed) => {
                    stats.entries_built += 1;
                    stats.midnight_splits += parsed.midnight_splits;
                    rows.extend(parsed.rows);
                }
                Err(e) => match mode {
                    BuildMode::Strict => {
                        error!(
                            "Failed to parse schedule for '{}': {}",
                            entry.name.trim(),
                            e
                        );
                        return Err(e);
                    }
                    BuildMode::Permissive => {
                        warn!(
                            "Skipping '{}' with unparsable schedule '{}': {}",
                            entry.name.trim(),
                            entry.schedule,
                            e
                        );
                        stats.add_skipped(SkippedEntry::new(entry, e));
                    }
                },
            }
        }

        stats.rows_emitted = rows.len();
        info!("{}", stats.summary());

        Ok(BuildResult::new(ScheduleTable { rows }, stats))
    }

    /// Strict build returning only the table
    pub fn from_entries<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a RestaurantEntry>,
    {
        Self::build(entries, BuildMode::Strict).map(|result| result.table)
    }
}
