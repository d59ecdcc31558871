//! RON data loader
//!
//! Loads the league table from an external RON file, with fallback to the
//! built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::progression::{CatalogError, League, RankCatalog};
use super::leagues::{default_catalog, default_leagues};

/// Default location of data files, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "assets/data";

/// File name of the league table
pub const LEAGUES_FILE: &str = "leagues.ron";

/// Errors while reading or writing data files
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize leagues: {0}")]
    Serialize(#[from] ron::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Manages external configuration data
#[derive(Debug, Clone)]
pub struct DataManager {
    /// League table shared with every progression store
    pub catalog: Arc<RankCatalog>,
}

impl DataManager {
    /// Load from `base_path`, falling back to defaults on any failure
    pub fn load_or_default(base_path: &Path) -> Self {
        Self::load_from(base_path).unwrap_or_else(|e| {
            log::warn!("{}; using built-in leagues", e);
            Self::default()
        })
    }

    /// Load from `base_path`; a missing file yields the defaults
    pub fn load_from(base_path: &Path) -> Result<Self, DataError> {
        let path = base_path.join(LEAGUES_FILE);
        if !path.exists() {
            log::debug!("No {} in {:?}, using built-in leagues", LEAGUES_FILE, base_path);
            return Ok(Self::default());
        }

        let catalog = load_catalog(&path)?;
        log::info!("Loaded {} leagues from {:?}", catalog.leagues().len(), path);
        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }

    /// Get the rank catalog
    pub fn rank_catalog(&self) -> Arc<RankCatalog> {
        Arc::clone(&self.catalog)
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            catalog: Arc::new(default_catalog()),
        }
    }
}

/// Parse a league table file
pub fn load_catalog(path: &Path) -> Result<RankCatalog, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let leagues: Vec<League> = ron::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RankCatalog::new(leagues)?)
}

/// Export the built-in league table to `base_path` for easy editing
pub fn export_default_data(base_path: &Path) -> Result<PathBuf, DataError> {
    fs::create_dir_all(base_path).map_err(|source| DataError::Io {
        path: base_path.to_path_buf(),
        source,
    })?;

    let leagues_ron = ron::ser::to_string_pretty(&default_leagues(), ron::ser::PrettyConfig::default())?;
    let path = base_path.join(LEAGUES_FILE);
    fs::write(&path, leagues_ron).map_err(|source| DataError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!("Exported default leagues to {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_default_data(dir.path()).unwrap();
        assert!(path.exists(), "leagues.ron not created");

        let manager = DataManager::load_from(dir.path()).unwrap();
        assert_eq!(*manager.catalog, default_catalog());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = DataManager::load_from(dir.path()).unwrap();
        assert_eq!(manager.catalog.leagues().len(), 10);
    }

    #[test]
    fn test_custom_leagues_file() {
        let dir = tempfile::tempdir().unwrap();
        let content = r#"[
            (
                name: "Rookie",
                min_score: 0.0,
                max_score: 50.0,
                levels: [
                    (number: 1, title: "Fresh", min_score: 0.0),
                    (number: 2, title: "Warm", min_score: 25.0),
                ],
            ),
        ]"#;
        fs::write(dir.path().join(LEAGUES_FILE), content).unwrap();

        let manager = DataManager::load_from(dir.path()).unwrap();
        let catalog = manager.rank_catalog();
        assert_eq!(catalog.leagues().len(), 1);
        assert_eq!(catalog.leagues()[0].icon, "");
        assert_eq!(catalog.rank_progress(10.0), 40.0);
    }

    #[test]
    fn test_broken_file_is_an_error_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LEAGUES_FILE), "[ (name: ").unwrap();

        assert!(matches!(DataManager::load_from(dir.path()), Err(DataError::Parse { .. })));
        let manager = DataManager::load_or_default(dir.path());
        assert_eq!(*manager.catalog, default_catalog());
    }

    #[test]
    fn test_empty_league_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(LEAGUES_FILE),
            r#"[(name: "Hollow", min_score: 0.0, max_score: 10.0, levels: [])]"#,
        )
        .unwrap();

        assert!(matches!(
            DataManager::load_from(dir.path()),
            Err(DataError::Catalog(CatalogError::EmptyLeague { league: 0, .. }))
        ));
    }
}
