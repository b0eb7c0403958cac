//! Application configuration for linmap
//!
//! An optional `linmap.toml` chooses where the definition files live, the
//! initial base point and how the plot axes are sized. Every key may be
//! omitted; missing keys take their defaults.
//!
//! ```toml
//! data_dir = "."
//! base_point = [1.0, 0.0]
//! rescale_axes = false
//! axis_limit = 3.5
//! ```

use std::path::{Path, PathBuf};

use linmap_core::viewport::DEFAULT_AXIS_LIMIT;
use linmap_core::{BasePoint, PlotLimits};
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};
use crate::store::ConfigStore;

/// File name of the application configuration
pub const CONFIG_FILE: &str = "linmap.toml";

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding `polygons.ini` and `matrices.ini`
    pub data_dir: PathBuf,
    /// Initial translation applied to the selected polygon
    pub base_point: [f64; 2],
    /// Grow the axes to keep far-away points visible
    pub rescale_axes: bool,
    /// Half-width of the plot window
    pub axis_limit: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            base_point: [1.0, 0.0],
            rescale_axes: false,
            axis_limit: DEFAULT_AXIS_LIMIT,
        }
    }
}

impl AppConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Where a config file is looked for: the working directory first, then
    /// the platform config directory.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("linmap").join(CONFIG_FILE));
        }
        paths
    }

    /// Load the first config file found, or the defaults when there is none.
    pub fn load() -> SettingsResult<Self> {
        match Self::search_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading configuration");
                Self::load_from_file(&path)
            }
            None => {
                tracing::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a TOML file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.base_point.iter().all(|v| v.is_finite()) {
            return Err(SettingsError::InvalidSetting {
                key: "base_point".to_string(),
                reason: "coordinates must be finite".to_string(),
            });
        }

        if !(self.axis_limit.is_finite() && self.axis_limit > 0.0) {
            return Err(SettingsError::InvalidSetting {
                key: "axis_limit".to_string(),
                reason: "must be a positive number".to_string(),
            });
        }

        Ok(())
    }

    /// Definition file store for [`Self::data_dir`]
    pub fn store(&self) -> ConfigStore {
        ConfigStore::new(&self.data_dir)
    }

    pub fn initial_base_point(&self) -> BasePoint {
        let [x, y] = self.base_point;
        BasePoint::at(x, y)
    }

    pub fn plot_limits(&self) -> PlotLimits {
        PlotLimits::new(self.axis_limit, self.rescale_axes)
    }
}
