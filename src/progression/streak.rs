//! Streaks, lives and the weekly activity grid
//!
//! `record_activity` is the one real state machine in the engine. A
//! qualifying event dated today extends the streak at most once per day.
//! A back-dated event that follows a missed day costs a life, and running
//! out of lives forfeits the streak. Lives are never replenished.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::activity::{weekday_index, ActivityKind};

/// Forgiveness budget of a fresh profile
pub const MAX_LIVES: u32 = 2;

/// Progression state of one user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionState {
    /// Cumulative experience points, never decremented
    pub total_score: f64,
    /// Consecutive qualifying days
    pub current_streak: u32,
    /// Historical maximum of `current_streak`
    pub best_streak: u32,
    /// Remaining missed-day forgiveness, in `0..=MAX_LIVES`
    pub lives: u32,
    /// Day of the most recent non-exempt event
    pub last_activity_date: Option<NaiveDate>,
    /// One slot per weekday, Sunday first
    pub week_activity: [bool; 7],
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            total_score: 0.0,
            current_streak: 0,
            best_streak: 0,
            lives: MAX_LIVES,
            last_activity_date: None,
            week_activity: [false; 7],
        }
    }
}

/// What a call to [`ProgressionState::record_activity`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakChange {
    /// Exempt kind: only the weekly grid was touched
    Exempt,
    /// First qualifying event of today
    Extended { streak: u32 },
    /// Today was already counted
    AlreadyCounted,
    /// A missed day consumed a life
    LifeLost { lives: u32 },
    /// The last life was consumed and the streak reset
    StreakLost { previous: u32 },
    /// Nothing beyond the last activity date changed
    Unchanged,
}

impl ProgressionState {
    /// Create a fresh profile state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a loggable action dated `date`, with `today` as the reference day.
    pub fn record_activity(&mut self, date: NaiveDate, kind: ActivityKind, today: NaiveDate) -> StreakChange {
        self.week_activity[weekday_index(date)] = true;

        if kind.is_exempt() {
            return StreakChange::Exempt;
        }

        let change = if date == today {
            match self.last_activity_date {
                Some(last) if last >= today => StreakChange::AlreadyCounted,
                _ => {
                    self.current_streak += 1;
                    self.best_streak = self.best_streak.max(self.current_streak);
                    StreakChange::Extended { streak: self.current_streak }
                }
            }
        } else {
            match self.last_activity_date {
                Some(last) if (date - last).num_days() > 1 => self.lose_life(),
                _ => StreakChange::Unchanged,
            }
        };

        self.last_activity_date = Some(date);
        change
    }

    fn lose_life(&mut self) -> StreakChange {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            let previous = self.current_streak;
            self.current_streak = 0;
            StreakChange::StreakLost { previous }
        } else {
            StreakChange::LifeLost { lives: self.lives }
        }
    }

    /// Number of weekday slots marked active
    pub fn active_days(&self) -> usize {
        self.week_activity.iter().filter(|&&active| active).count()
    }
}
