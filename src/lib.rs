//! Restaurant Hours Library
//!
//! A Rust library for normalizing free-text weekly opening hours
//! ("Mon-Fri 11 am - 10 pm / Sat 5:30 pm - 10 pm") into a flat table of
//! per-day open/close intervals and answering queries against that table.
//!
//! This library provides tools for:
//! - Expanding compact day-range notation with week wrap-around
//! - Extracting 12-hour clock time ranges from loosely formatted text
//! - Splitting windows that cross midnight into two same-day intervals
//! - Point-in-time openness lookups and per-restaurant timing listings
//! - Aggregate insights over the normalized schedule table
//! - Reading restaurant/hours lines from CSV-like input files

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod insights;
        pub mod schedule_parser;
        pub mod schedule_table;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{RestaurantEntry, ScheduleInterval, TimeOfDay, WeekDay};
pub use app::services::insights::Insights;
pub use app::services::schedule_table::{BuildMode, BuildResult, ScheduleTable};
pub use config::Config;

/// Result type alias for the restaurant hours processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for schedule parsing and the surrounding input/output glue
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A day token is not one of the seven canonical abbreviations
    #[error("Unknown day token: '{token}'")]
    UnknownDayToken { token: String },

    /// Fewer than two clock times were found in a time clause
    #[error("Missing time range in '{text}': expected 2 times, found {found}")]
    MissingTimeRange { text: String, found: usize },

    /// A clock time token was found but could not be decoded
    #[error("Unparsable time '{token}': {reason}")]
    UnparsableTime { token: String, reason: String },

    /// A schedule segment could not be split into day and time clauses
    #[error("Malformed schedule segment '{segment}': {reason}")]
    MalformedScheduleSegment { segment: String, reason: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Input line could not be split into restaurant and schedule
    #[error("Input format error in file '{file}' line {line}: {message}")]
    InputFormat {
        file: String,
        line: usize,
        message: String,
    },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization or deserialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an unknown day token error
    pub fn unknown_day_token(token: impl Into<String>) -> Self {
        Self::UnknownDayToken {
            token: token.into(),
        }
    }

    /// Create a missing time range error
    pub fn missing_time_range(text: impl Into<String>, found: usize) -> Self {
        Self::MissingTimeRange {
            text: text.into(),
            found,
        }
    }

    /// Create an unparsable time error
    pub fn unparsable_time(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnparsableTime {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed schedule segment error
    pub fn malformed_segment(segment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedScheduleSegment {
            segment: segment.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an input format error
    pub fn input_format(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::InputFormat {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// True for the four schedule parsing failures raised while building a table
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownDayToken { .. }
                | Self::MissingTimeRange { .. }
                | Self::UnparsableTime { .. }
                | Self::MalformedScheduleSegment { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
