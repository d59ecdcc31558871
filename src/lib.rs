//! Habitforge - progression engine for a health habit tracker
//!
//! Turns daily activity (weight logged, water intake, exercise) into
//! experience points, streaks, a small forgiveness budget of lives,
//! and a league/level rank.

pub mod progression;
pub mod save;
pub mod data;

// Re-export commonly used types
pub use progression::{
    ActivityKind, ProgressionState, ProgressionStore, ProgressSnapshot, Rank, RankCatalog,
    SharedProgression, StreakChange,
};
pub use data::DataManager;
