//! Schedule segment splitting
//!
//! A raw schedule is a `/`-separated list of segments, each holding a day
//! clause followed by a time clause: `"Mon, Wed-Sun 11 am - 10 pm"`.

use super::times::first_time_token_start;
use crate::constants::SEGMENT_SEPARATOR;
use crate::{Error, Result};

/// Day and time clauses of one schedule segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSegment<'a> {
    /// Leading day expression, e.g. `"Mon, Wed-Sun"`
    pub day_clause: &'a str,

    /// Trailing time range, e.g. `"11 am - 10 pm"`
    pub time_clause: &'a str,
}

/// Iterate the `/`-separated segments of a raw schedule string
pub fn split_segments(schedule: &str) -> impl Iterator<Item = &str> {
    schedule.split(SEGMENT_SEPARATOR)
}

/// Split a segment into its day clause and time clause
///
/// The split point is the start of the first time token. When the segment
/// holds no complete time token, the first ASCII digit is used instead so the
/// time clause can still report what it is missing.
///
/// # Errors
///
/// Returns [`Error::MalformedScheduleSegment`] when the segment is blank,
/// contains no digits at all, or has nothing before its time clause.
pub fn split_segment(segment: &str) -> Result<ScheduleSegment<'_>> {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return Err(Error::malformed_segment(segment, "segment is empty"));
    }

    let split_at = first_time_token_start(trimmed)
        .or_else(|| trimmed.find(|c: char| c.is_ascii_digit()))
        .ok_or_else(|| Error::malformed_segment(trimmed, "no time range found"))?;

    let day_clause = trimmed[..split_at].trim();
    if day_clause.is_empty() {
        return Err(Error::malformed_segment(
            trimmed,
            "no day range before the time range",
        ));
    }

    Ok(ScheduleSegment {
        day_clause,
        time_clause: trimmed[split_at..].trim(),
    })
}
