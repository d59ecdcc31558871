//! Leagues and levels
//!
//! A two-tier rank derived from total score by range lookup against an
//! ordered catalog. The catalog is configuration; ranges are assumed to be
//! sorted and contiguous and are not validated beyond basic shape.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A level inside a league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Display number, 1-based
    pub number: u32,
    pub title: String,
    /// Score at which this level starts
    pub min_score: f64,
    #[serde(default)]
    pub perks: Vec<String>,
}

/// A league spanning a score range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    pub min_score: f64,
    pub max_score: f64,
    pub levels: Vec<Level>,
}

/// Position in the catalog, ordered by league then level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank {
    pub league: usize,
    pub level: usize,
}

/// Catalog shape errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("rank catalog has no leagues")]
    NoLeagues,
    #[error("league {league} ({name}) has no levels")]
    EmptyLeague { league: usize, name: String },
}

/// Ordered league table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<League>", into = "Vec<League>")]
pub struct RankCatalog {
    leagues: Vec<League>,
}

impl TryFrom<Vec<League>> for RankCatalog {
    type Error = CatalogError;

    fn try_from(leagues: Vec<League>) -> Result<Self, Self::Error> {
        Self::new(leagues)
    }
}

impl From<RankCatalog> for Vec<League> {
    fn from(catalog: RankCatalog) -> Self {
        catalog.leagues
    }
}

impl RankCatalog {
    /// Build a catalog; fails only if lookups would have nothing to return
    pub fn new(leagues: Vec<League>) -> Result<Self, CatalogError> {
        if leagues.is_empty() {
            return Err(CatalogError::NoLeagues);
        }
        if let Some((index, league)) = leagues.iter().enumerate().find(|(_, l)| l.levels.is_empty()) {
            return Err(CatalogError::EmptyLeague {
                league: index,
                name: league.name.clone(),
            });
        }
        Ok(Self { leagues })
    }

    pub fn leagues(&self) -> &[League] {
        &self.leagues
    }

    pub fn league(&self, index: usize) -> Option<&League> {
        self.leagues.get(index)
    }

    pub fn level(&self, rank: Rank) -> Option<&Level> {
        self.league(rank.league)?.levels.get(rank.level)
    }

    /// Rank for a total score, clamped to the first and last entries
    pub fn rank_for(&self, score: f64) -> Rank {
        let league = find_bracket(self.leagues.iter().map(|l| l.min_score), score);
        let level = find_bracket(self.leagues[league].levels.iter().map(|l| l.min_score), score);
        Rank { league, level }
    }

    /// Percent of the way from the current level to the next one.
    ///
    /// The last level of a league always reports 100.
    pub fn rank_progress(&self, score: f64) -> f64 {
        let rank = self.rank_for(score);
        let levels = &self.leagues[rank.league].levels;
        let current = &levels[rank.level];
        let Some(next) = levels.get(rank.level + 1) else {
            return 100.0;
        };

        let range = next.min_score - current.min_score;
        if range <= 0.0 {
            return 100.0;
        }
        ((score - current.min_score) / range * 100.0).clamp(0.0, 100.0)
    }
}

/// Index of the last bracket whose lower bound is <= score, or 0 if none
fn find_bracket(bounds: impl Iterator<Item = f64>, score: f64) -> usize {
    bounds
        .enumerate()
        .take_while(|(_, min)| score >= *min)
        .last()
        .map(|(index, _)| index)
        .unwrap_or(0)
}
