//! Midnight splitting of opening windows

use crate::app::models::{ScheduleInterval, TimeOfDay, WeekDay};
use std::iter::{Chain, Once, once};

/// Result of normalizing one day's opening window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedInterval {
    /// Window closes on the day it opens
    Single(ScheduleInterval),

    /// Window runs past midnight into the next weekday
    Split {
        /// `open` until 23:59 on the original day
        before_midnight: ScheduleInterval,
        /// 00:00 until `close` on the following day
        after_midnight: ScheduleInterval,
    },
}

impl NormalizedInterval {
    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split { .. })
    }
}

impl IntoIterator for NormalizedInterval {
    type Item = ScheduleInterval;
    type IntoIter = Chain<Once<ScheduleInterval>, std::option::IntoIter<ScheduleInterval>>;

    /// Rows in table order: the same-day half always precedes the next-day half
    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Single(row) => once(row).chain(None),
            Self::Split {
                before_midnight,
                after_midnight,
            } => once(before_midnight).chain(Some(after_midnight)),
        }
    }
}

/// Normalize one (day, open, close) window
///
/// A close time earlier than the open time means the window crosses midnight;
/// it becomes `(day, open, 23:59)` plus `(next day, 00:00, close)`, with Sunday
/// wrapping to Monday. Equal open and close times are a single row.
pub fn normalize_interval(
    restaurant: &str,
    day: WeekDay,
    open: TimeOfDay,
    close: TimeOfDay,
) -> NormalizedInterval {
    if close < open {
        NormalizedInterval::Split {
            before_midnight: ScheduleInterval::new(restaurant, day, open, TimeOfDay::END_OF_DAY),
            after_midnight: ScheduleInterval::new(restaurant, day.succ(), TimeOfDay::MIDNIGHT, close),
        }
    } else {
        NormalizedInterval::Single(ScheduleInterval::new(restaurant, day, open, close))
    }
}
