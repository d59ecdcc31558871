//! Experience points and streak multipliers
//!
//! Points earned by an action are scaled by how long the current streak is.

use super::streak::ProgressionState;

/// Get the XP multiplier for a streak length
pub fn multiplier_for_streak(streak: u32) -> f64 {
    match streak {
        0..=6 => 1.0,
        7..=14 => 1.5,
        15..=29 => 2.0,
        _ => 3.0,
    }
}

impl ProgressionState {
    /// Multiplier applied to the next award
    pub fn current_multiplier(&self) -> f64 {
        multiplier_for_streak(self.current_streak)
    }

    /// Award points scaled by the current multiplier.
    ///
    /// Returns the amount actually added, for "+N points" notifications.
    /// `base` must be positive.
    pub fn award_points(&mut self, base: f64) -> f64 {
        debug_assert!(base > 0.0, "award_points called with non-positive amount {}", base);
        let applied = base * self.current_multiplier();
        self.total_score += applied;
        applied
    }
}
