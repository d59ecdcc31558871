//! Progression systems
//!
//! Score, streak and rank bookkeeping for a single user profile.

pub mod activity;
pub mod clock;
pub mod rank;
pub mod rewards;
pub mod store;
pub mod streak;
pub mod xp;

pub use activity::{ActivityKind, WEEK_DAYS};
pub use clock::{Clock, FixedClock, SystemClock};
pub use rank::{CatalogError, League, Level, Rank, RankCatalog};
pub use rewards::{exercise_rewards, water_rewards, weight_log_rewards, WaterMilestone, WeightOutcome};
pub use store::{ProgressSnapshot, ProgressionStore, SharedProgression};
pub use streak::{ProgressionState, StreakChange, MAX_LIVES};
pub use xp::multiplier_for_streak;
