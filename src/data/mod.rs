//! Data loading and external configuration
//!
//! The league table is data-driven: it is read from a RON file when one is
//! present and falls back to the built-in table otherwise.

pub mod leagues;
pub mod loader;

pub use leagues::{default_catalog, default_leagues};
pub use loader::{export_default_data, load_catalog, DataError, DataManager, DEFAULT_DATA_DIR};
