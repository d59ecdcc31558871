//! Save/load system
//!
//! Handles persisting a profile's progression state.

pub mod profile;

pub use profile::{
    ProfileData, SaveError, PROFILE_VERSION,
    load_profile, save_profile, delete_profile, default_profile_path,
};
