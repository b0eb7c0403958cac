//! Definition file store
//!
//! Loads `polygons.ini` and `matrices.ini` from a data directory. A missing
//! file is recreated from the built-in defaults and read again; any other
//! read failure, or a failure to write the defaults, is returned.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use linmap_core::{NamedCollection, PointSeries, TransformMatrix};

use crate::defaults::{DEFAULT_MATRICES, DEFAULT_POLYGONS};
use crate::error::{SettingsError, SettingsResult};
use crate::ini::{parse_matrices, parse_polygons};

/// File name of the polygon definitions
pub const POLYGONS_FILE: &str = "polygons.ini";

/// File name of the matrix definitions
pub const MATRICES_FILE: &str = "matrices.ini";

/// Access to the two definition files in one directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    polygons_path: PathBuf,
    matrices_path: PathBuf,
}

impl ConfigStore {
    /// Store rooted at `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            polygons_path: dir.join(POLYGONS_FILE),
            matrices_path: dir.join(MATRICES_FILE),
        }
    }

    pub fn polygons_path(&self) -> &Path {
        &self.polygons_path
    }

    pub fn matrices_path(&self) -> &Path {
        &self.matrices_path
    }

    /// Load every polygon record, creating the file first if needed.
    pub fn load_polygons(&self) -> SettingsResult<NamedCollection<PointSeries>> {
        let text = read_or_create(&self.polygons_path, DEFAULT_POLYGONS)?;
        let polygons = parse_polygons(&text);
        tracing::info!(
            path = %self.polygons_path.display(),
            count = polygons.len(),
            "loaded polygons"
        );
        Ok(polygons)
    }

    /// Load every matrix record, creating the file first if needed.
    pub fn load_matrices(&self) -> SettingsResult<NamedCollection<TransformMatrix>> {
        let text = read_or_create(&self.matrices_path, DEFAULT_MATRICES)?;
        let matrices = parse_matrices(&text);
        tracing::info!(
            path = %self.matrices_path.display(),
            count = matrices.len(),
            "loaded matrices"
        );
        Ok(matrices)
    }

    /// Overwrite `polygons.ini` with the defaults.
    pub fn renew_polygons(&self) -> SettingsResult<()> {
        write_defaults(&self.polygons_path, DEFAULT_POLYGONS)
    }

    /// Overwrite `matrices.ini` with the defaults.
    pub fn renew_matrices(&self) -> SettingsResult<()> {
        write_defaults(&self.matrices_path, DEFAULT_MATRICES)
    }
}

fn write_defaults(path: &Path, contents: &str) -> SettingsResult<()> {
    tracing::info!(path = %path.display(), "creating default definitions");
    fs::write(path, contents).map_err(|source| SettingsError::WriteDefaults {
        path: path.to_path_buf(),
        source,
    })
}

fn read_or_create(path: &Path, defaults: &str) -> SettingsResult<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            write_defaults(path, defaults)?;
            fs::read_to_string(path).map_err(|source| SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        Err(source) => Err(SettingsError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
