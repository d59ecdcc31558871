//! Progression store
//!
//! Owns one profile's state together with the rank catalog and the clock,
//! and notifies an observer after every mutation so the caller can persist
//! the new snapshot.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::activity::ActivityKind;
use super::clock::{Clock, SystemClock};
use super::rank::{Rank, RankCatalog};
use super::streak::{ProgressionState, StreakChange};

/// Callback invoked with the state after each mutation
pub type Observer = Box<dyn FnMut(&ProgressionState) + Send>;

/// Read model for display components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub total_score: f64,
    pub current_streak: u32,
    pub best_streak: u32,
    pub lives: u32,
    pub last_activity_date: Option<NaiveDate>,
    pub week_activity: [bool; 7],
    pub multiplier: f64,
    pub rank: Rank,
    pub rank_progress: f64,
    pub league_name: String,
    pub level_title: String,
}

/// Progression engine for a single profile
pub struct ProgressionStore {
    state: ProgressionState,
    catalog: Arc<RankCatalog>,
    clock: Box<dyn Clock>,
    observer: Option<Observer>,
}

impl std::fmt::Debug for ProgressionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressionStore")
            .field("state", &self.state)
            .field("leagues", &self.catalog.leagues().len())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl ProgressionStore {
    /// Create a store for a brand-new profile
    pub fn new(catalog: Arc<RankCatalog>) -> Self {
        Self::with_state(ProgressionState::default(), catalog)
    }

    /// Create a store from a previously saved snapshot
    pub fn with_state(state: ProgressionState, catalog: Arc<RankCatalog>) -> Self {
        Self {
            state,
            catalog,
            clock: Box::new(SystemClock),
            observer: None,
        }
    }

    /// Replace the clock used to decide what "today" is
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Register the observer called after every mutation
    pub fn on_change(mut self, observer: impl FnMut(&ProgressionState) + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    pub fn catalog(&self) -> &RankCatalog {
        &self.catalog
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Award points scaled by the streak multiplier; returns the applied amount
    pub fn award_points(&mut self, base: f64) -> f64 {
        let before = self.rank();
        let applied = self.state.award_points(base);
        log::debug!(
            "Awarded {} points ({} base x{})",
            applied,
            base,
            self.state.current_multiplier()
        );
        self.log_rank_change(before);
        self.notify();
        applied
    }

    /// Award a batch of base amounts one by one; returns the applied total
    pub fn apply_rewards(&mut self, awards: &[f64]) -> f64 {
        awards.iter().map(|&base| self.award_points(base)).sum()
    }

    /// Record an activity event for `date`
    pub fn record_activity(&mut self, date: NaiveDate, kind: ActivityKind) -> StreakChange {
        let today = self.clock.today();
        let change = self.state.record_activity(date, kind, today);

        match change {
            StreakChange::Extended { streak } => {
                log::info!("Streak extended to {} day(s) by {} entry", streak, kind);
            }
            StreakChange::LifeLost { lives } => {
                log::info!("Missed a day before {}: {} live(s) left", date, lives);
            }
            StreakChange::StreakLost { previous } => {
                log::info!("Out of lives, streak of {} day(s) lost", previous);
            }
            StreakChange::Exempt | StreakChange::AlreadyCounted | StreakChange::Unchanged => {
                log::debug!("Recorded {} entry for {}: {:?}", kind, date, change);
            }
        }

        self.notify();
        change
    }

    pub fn current_multiplier(&self) -> f64 {
        self.state.current_multiplier()
    }

    pub fn rank(&self) -> Rank {
        self.catalog.rank_for(self.state.total_score)
    }

    pub fn rank_progress(&self) -> f64 {
        self.catalog.rank_progress(self.state.total_score)
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        let rank = self.rank();
        let league_name = self
            .catalog
            .league(rank.league)
            .map(|l| l.name.clone())
            .unwrap_or_default();
        let level_title = self
            .catalog
            .level(rank)
            .map(|l| l.title.clone())
            .unwrap_or_default();

        ProgressSnapshot {
            total_score: self.state.total_score,
            current_streak: self.state.current_streak,
            best_streak: self.state.best_streak,
            lives: self.state.lives,
            last_activity_date: self.state.last_activity_date,
            week_activity: self.state.week_activity,
            multiplier: self.current_multiplier(),
            rank,
            rank_progress: self.rank_progress(),
            league_name,
            level_title,
        }
    }

    /// Take the state out of the store
    pub fn into_state(self) -> ProgressionState {
        self.state
    }

    fn log_rank_change(&self, before: Rank) {
        let after = self.rank();
        if after != before {
            if let Some(level) = self.catalog.level(after) {
                log::info!("Rank up: {} (level {})", level.title, level.number);
            }
        }
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.state);
        }
    }
}

/// Cloneable handle that serialises access to one profile's store
#[derive(Debug, Clone)]
pub struct SharedProgression {
    inner: Arc<Mutex<ProgressionStore>>,
}

impl SharedProgression {
    pub fn new(store: ProgressionStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn award_points(&self, base: f64) -> f64 {
        self.inner.lock().award_points(base)
    }

    pub fn apply_rewards(&self, awards: &[f64]) -> f64 {
        self.inner.lock().apply_rewards(awards)
    }

    pub fn record_activity(&self, date: NaiveDate, kind: ActivityKind) -> StreakChange {
        self.inner.lock().record_activity(date, kind)
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.inner.lock().snapshot()
    }

    /// Run a closure with exclusive access to the store
    pub fn with<R>(&self, f: impl FnOnce(&mut ProgressionStore) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_catalog;
    use crate::progression::clock::FixedClock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_on(today: NaiveDate) -> ProgressionStore {
        ProgressionStore::new(Arc::new(default_catalog())).with_clock(FixedClock(today))
    }

    #[test]
    fn test_record_uses_store_clock() {
        let today = date(2024, 3, 14);
        let mut store = store_on(today);
        assert_eq!(store.record_activity(today, ActivityKind::Weight), StreakChange::Extended { streak: 1 });
        assert_eq!(store.record_activity(today, ActivityKind::Exercise), StreakChange::AlreadyCounted);
        assert_eq!(store.state().current_streak, 1);
    }

    #[test]
    fn test_award_scales_with_streak() {
        let state = ProgressionState {
            current_streak: 10,
            best_streak: 12,
            ..Default::default()
        };
        let mut store = ProgressionStore::with_state(state, Arc::new(default_catalog()));
        assert_eq!(store.award_points(50.0), 75.0);
        assert_eq!(store.state().total_score, 75.0);
    }

    #[test]
    fn test_apply_rewards_sums_applied_amounts() {
        let state = ProgressionState {
            current_streak: 15,
            best_streak: 15,
            ..Default::default()
        };
        let mut store = ProgressionStore::with_state(state, Arc::new(default_catalog()));
        let applied = store.apply_rewards(&[50.0, 120.0, 100.0]);
        assert_eq!(applied, 540.0);
        assert_eq!(store.state().total_score, 540.0);
    }

    #[test]
    fn test_observer_sees_every_mutation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let today = date(2024, 3, 14);
        let mut store = store_on(today).on_change(move |state| {
            seen.fetch_add(1, Ordering::SeqCst);
            assert!(state.current_streak <= state.best_streak);
        });

        store.record_activity(today, ActivityKind::Weight);
        store.award_points(10.0);
        store.record_activity(today, ActivityKind::Water);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_snapshot_reports_rank_names() {
        let state = ProgressionState {
            total_score: 2400.0,
            ..Default::default()
        };
        let store = ProgressionStore::with_state(state, Arc::new(default_catalog()));
        let snapshot = store.snapshot();
        assert_eq!(snapshot.rank, Rank { league: 1, level: 0 });
        assert_eq!(snapshot.league_name, "Piloto Espacial");
        assert_eq!(snapshot.level_title, "Piloto Novato");
        assert_eq!(snapshot.rank_progress, 50.0);
        assert_eq!(snapshot.lives, 2);
        assert_eq!(snapshot.multiplier, 1.0);
    }

    #[test]
    fn test_shared_store_serialises_awards() {
        let shared = SharedProgression::new(store_on(date(2024, 3, 14)));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        shared.award_points(1.0);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(shared.snapshot().total_score, 800.0);
    }

    #[test]
    fn test_shared_store_counts_one_streak_day() {
        let today = date(2024, 3, 14);
        let shared = SharedProgression::new(store_on(today));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.record_activity(today, ActivityKind::Exercise))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(shared.with(|store| store.state().current_streak), 1);
    }
}
