//! linmap Settings Crate
//!
//! Reads and regenerates the polygon and matrix definition files, and loads
//! the application configuration.

pub mod config;
pub mod defaults;
pub mod error;
pub mod ini;
pub mod store;

pub use config::AppConfig;
pub use error::{SettingsError, SettingsResult};
pub use ini::{parse_matrices, parse_polygons};
pub use store::{ConfigStore, MATRICES_FILE, POLYGONS_FILE};
