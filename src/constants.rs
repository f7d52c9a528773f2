//! Application constants for the restaurant hours processor
//!
//! This module contains the separators, calendar constants and default values
//! used throughout the parsing engine and the command-line driver.

// =============================================================================
// Calendar Constants
// =============================================================================

/// Canonical weekday abbreviations in ordinal order (Mon = 0 ... Sun = 6)
pub const DAY_ABBREVIATIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Number of days in one weekly cycle
pub const DAYS_PER_WEEK: usize = 7;

/// Number of whole-hour buckets in a day
pub const HOURS_PER_DAY: usize = 24;

pub const MINUTES_PER_HOUR: u16 = 60;

/// Last representable minute of a day (23:59), used as the close time of the
/// first half of a midnight split
pub const END_OF_DAY_MINUTES: u16 = 23 * MINUTES_PER_HOUR + 59;

// =============================================================================
// Schedule Text Notation
// =============================================================================

/// Separates independent day/time windows in a raw schedule string
pub const SEGMENT_SEPARATOR: char = '/';

/// Separates day tokens or day ranges inside a day clause ("Mon, Wed-Sun")
pub const DAY_LIST_SEPARATOR: char = ',';

/// Separates the two endpoints of a day range ("Mon-Fri")
pub const DAY_RANGE_SEPARATOR: char = '-';

/// Separates restaurant name from schedule text in an input line
pub const FIELD_SEPARATOR: char = ',';

/// Separator between open and close time in a rendered timing string
pub const TIMING_SEPARATOR: &str = " - ";

// =============================================================================
// Driver Defaults
// =============================================================================

/// File extension picked up when an input path is a directory
pub const DEFAULT_INPUT_EXTENSION: &str = "csv";

/// Directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "restaurant-hours";

/// Configuration file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Tracing target used for the default log filter
pub const LOG_TARGET: &str = "restaurant_hours";
