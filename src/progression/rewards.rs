//! Base point rules of the trackers
//!
//! Each returned entry is awarded separately, so the streak multiplier
//! applies to every one of them.

use serde::{Deserialize, Serialize};

/// Points for a plain weight entry
pub const WEIGHT_ENTRY_XP: f64 = 50.0;
/// Points for completing weight onboarding
pub const WEIGHT_ONBOARDING_XP: f64 = 100.0;
/// Bonus when the target weight is reached
pub const WEIGHT_GOAL_XP: f64 = 500.0;
/// Bonus when an intermediate target is crossed
pub const WEIGHT_SUBGOAL_XP: f64 = 200.0;

pub const EXERCISE_BASE_XP: f64 = 50.0;
/// Awarded per full 10 minutes of exercise
pub const EXERCISE_XP_PER_10_MIN: f64 = 20.0;
pub const EXERCISE_LONG_SESSION_XP: f64 = 100.0;
pub const EXERCISE_LONG_SESSION_MINUTES: u32 = 60;

/// Result of a weight entry relative to the user's goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightOutcome {
    #[default]
    Logged,
    /// First entry, recorded during onboarding
    Onboarding,
    SubGoalReached,
    GoalReached,
}

impl std::str::FromStr for WeightOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logged" => Ok(WeightOutcome::Logged),
            "onboarding" => Ok(WeightOutcome::Onboarding),
            "sub" | "sub_goal" => Ok(WeightOutcome::SubGoalReached),
            "main" | "goal" => Ok(WeightOutcome::GoalReached),
            _ => Err(format!("Unknown weight outcome: {}", s)),
        }
    }
}

/// Water intake milestones of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterMilestone {
    FirstGlass,
    HalfGoal,
    GoalComplete,
    GoalSet,
}

impl WaterMilestone {
    pub fn xp(&self) -> f64 {
        match self {
            WaterMilestone::FirstGlass => 25.0,
            WaterMilestone::HalfGoal => 50.0,
            WaterMilestone::GoalComplete => 100.0,
            WaterMilestone::GoalSet => 50.0,
        }
    }
}

impl std::str::FromStr for WaterMilestone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" | "first_glass" => Ok(WaterMilestone::FirstGlass),
            "half" | "half_goal" => Ok(WaterMilestone::HalfGoal),
            "goal" | "goal_complete" => Ok(WaterMilestone::GoalComplete),
            "set" | "goal_set" => Ok(WaterMilestone::GoalSet),
            _ => Err(format!("Unknown water milestone: {}", s)),
        }
    }
}

/// Awards for a weight entry
pub fn weight_log_rewards(outcome: WeightOutcome) -> Vec<f64> {
    match outcome {
        WeightOutcome::Onboarding => vec![WEIGHT_ONBOARDING_XP],
        WeightOutcome::Logged => vec![WEIGHT_ENTRY_XP],
        WeightOutcome::SubGoalReached => vec![WEIGHT_ENTRY_XP, WEIGHT_SUBGOAL_XP],
        WeightOutcome::GoalReached => vec![WEIGHT_ENTRY_XP, WEIGHT_GOAL_XP],
    }
}

/// Awards for an exercise session of `minutes`
pub fn exercise_rewards(minutes: u32) -> Vec<f64> {
    let mut awards = vec![EXERCISE_BASE_XP];

    let duration_xp = (minutes / 10) as f64 * EXERCISE_XP_PER_10_MIN;
    if duration_xp > 0.0 {
        awards.push(duration_xp);
    }

    if minutes >= EXERCISE_LONG_SESSION_MINUTES {
        awards.push(EXERCISE_LONG_SESSION_XP);
    }
    awards
}

/// Awards for a water milestone
pub fn water_rewards(milestone: WaterMilestone) -> Vec<f64> {
    vec![milestone.xp()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_rewards() {
        assert_eq!(exercise_rewards(5), vec![50.0]);
        assert_eq!(exercise_rewards(25), vec![50.0, 40.0]);
        assert_eq!(exercise_rewards(59), vec![50.0, 100.0]);
        assert_eq!(exercise_rewards(60), vec![50.0, 120.0, 100.0]);
    }

    #[test]
    fn test_weight_rewards() {
        assert_eq!(weight_log_rewards(WeightOutcome::Logged), vec![50.0]);
        assert_eq!(weight_log_rewards(WeightOutcome::Onboarding), vec![100.0]);
        assert_eq!(weight_log_rewards(WeightOutcome::SubGoalReached), vec![50.0, 200.0]);
        assert_eq!(weight_log_rewards(WeightOutcome::GoalReached), vec![50.0, 500.0]);
    }

    #[test]
    fn test_water_rewards() {
        assert_eq!(water_rewards(WaterMilestone::FirstGlass), vec![25.0]);
        assert_eq!("half".parse::<WaterMilestone>(), Ok(WaterMilestone::HalfGoal));
        assert!("ocean".parse::<WaterMilestone>().is_err());
    }

    #[test]
    fn test_all_awards_positive() {
        for minutes in 0..200 {
            assert!(exercise_rewards(minutes).iter().all(|&xp| xp > 0.0));
        }
    }
}
