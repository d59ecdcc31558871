//! Profile persistence
//!
//! Stores a profile's progression state as pretty JSON. This sits outside the
//! engine: the store only hands out snapshots through its observer.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::progression::ProgressionState;

/// Current profile version for compatibility
pub const PROFILE_VERSION: u32 = 1;

/// On-disk profile document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    /// Version for compatibility checking
    pub version: u32,
    pub state: ProgressionState,
}

impl ProfileData {
    pub fn new(state: ProgressionState) -> Self {
        Self {
            version: PROFILE_VERSION,
            state,
        }
    }
}

/// Save error types
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Profile version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SaveError + '_ {
    move |source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Get the default profile file path
pub fn default_profile_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "habitforge", "Habitforge") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("profile.json");
        path
    } else {
        PathBuf::from("./profile.json")
    }
}

/// Load the progression state, or a fresh one if no profile exists yet
pub fn load_profile(path: &Path) -> Result<ProgressionState, SaveError> {
    if !path.exists() {
        log::info!("No profile at {:?}, starting fresh", path);
        return Ok(ProgressionState::new());
    }

    let data = fs::read_to_string(path).map_err(io_error(path))?;
    let profile: ProfileData = serde_json::from_str(&data)?;

    if profile.version != PROFILE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: PROFILE_VERSION,
            found: profile.version,
        });
    }

    log::debug!("Profile loaded from {:?}", path);
    Ok(profile.state)
}

/// Save the progression state
pub fn save_profile(path: &Path, state: &ProgressionState) -> Result<(), SaveError> {
    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let json = serde_json::to_string_pretty(&ProfileData::new(state.clone()))?;
    fs::write(path, json).map_err(io_error(path))?;

    log::debug!("Profile saved to {:?}", path);
    Ok(())
}

/// Delete the profile file if present
pub fn delete_profile(path: &Path) -> Result<(), SaveError> {
    if path.exists() {
        fs::remove_file(path).map_err(io_error(path))?;
        log::info!("Deleted profile {:?}", path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::ActivityKind;
    use chrono::NaiveDate;

    #[test]
    fn test_missing_profile_is_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_profile(&dir.path().join("profile.json")).unwrap();
        assert_eq!(state, ProgressionState::new());
    }

    #[test]
    fn test_save_and_load_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("profile.json");

        let today = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let mut state = ProgressionState::new();
        state.record_activity(today, ActivityKind::Exercise, today);
        state.award_points(80.0);

        save_profile(&path, &state).unwrap();
        assert_eq!(load_profile(&path).unwrap(), state);

        delete_profile(&path).unwrap();
        assert!(!path.exists());
        // Deleting twice is fine
        delete_profile(&path).unwrap();
    }

    #[test]
    fn test_version_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let mut profile = ProfileData::new(ProgressionState::new());
        profile.version = 99;
        fs::write(&path, serde_json::to_string(&profile).unwrap()).unwrap();

        match load_profile(&path) {
            Err(SaveError::VersionMismatch { expected, found }) => {
                assert_eq!(expected, PROFILE_VERSION);
                assert_eq!(found, 99);
            }
            other => panic!("expected version mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_corrupt_profile_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_profile(&path), Err(SaveError::Parse(_))));
    }
}
