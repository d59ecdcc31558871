//! Activity kinds reported by the trackers

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Short weekday labels for the weekly grid, Monday first
pub const WEEK_DAYS: [&str; 7] = ["L", "M", "X", "J", "V", "S", "D"];

/// A loggable action coming from one of the trackers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Weight,
    Water,
    Exercise,
}

impl ActivityKind {
    /// Exempt kinds mark the weekly grid but never touch streak or lives.
    ///
    /// Water has its own daily reward loop (first glass, half goal, full goal),
    /// so it is kept out of streak bookkeeping.
    pub fn is_exempt(&self) -> bool {
        matches!(self, ActivityKind::Water)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivityKind::Weight => "weight",
            ActivityKind::Water => "water",
            ActivityKind::Exercise => "exercise",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weight" => Ok(ActivityKind::Weight),
            "water" => Ok(ActivityKind::Water),
            "exercise" => Ok(ActivityKind::Exercise),
            _ => Err(format!("Unknown activity kind: {}", s)),
        }
    }
}

/// Slot of `date` in the weekly grid (Sunday = 0 .. Saturday = 6)
///
/// The grid is keyed by absolute weekday, so two dates a week apart share a slot.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Label for a grid slot, matching [`weekday_index`]
pub fn weekday_label(index: usize) -> &'static str {
    // WEEK_DAYS starts on Monday, the grid starts on Sunday
    WEEK_DAYS[(index + 6) % 7]
}
