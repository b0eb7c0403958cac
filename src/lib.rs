//! # linmap
//!
//! Shows how a 2x2 matrix acts on a plane polygon. Polygons and matrices are
//! read from `polygons.ini` and `matrices.ini`; the selected polygon is
//! shifted by a base point (`before`) and multiplied by the selected matrix
//! (`after`).
//!
//! ## Architecture
//!
//! 1. **linmap-core** - grids, collections, transform pipeline, session
//! 2. **linmap-settings** - definition files, defaults, app configuration
//! 3. **linmap** - headless front end printing the derived outlines

pub use linmap_core::{
    BasePoint, CoreError, Frame, GridIssue, MatrixEdit, NamedCollection, PlotLimits, PointSeries,
    Session, TransformMatrix,
};
pub use linmap_settings::{AppConfig, ConfigStore, SettingsError};

use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything the headless front end reports.
#[derive(Debug, Serialize)]
pub struct Report {
    pub polygons: Vec<String>,
    pub matrices: Vec<String>,
    pub polygon: String,
    pub matrix: String,
    pub frame: Frame,
}

/// Build a session from the configured data directory.
pub fn open_session(config: &AppConfig) -> anyhow::Result<Session> {
    let store = config.store();
    let polygons = store.load_polygons()?;
    let matrices = store.load_matrices()?;
    Ok(Session::new(
        polygons,
        matrices,
        config.initial_base_point(),
    ))
}

/// Snapshot of the current selection and its outlines
pub fn report(session: &Session, limits: &PlotLimits) -> Report {
    Report {
        polygons: session.list_polygons().into_iter().map(String::from).collect(),
        matrices: session.list_matrices().into_iter().map(String::from).collect(),
        polygon: session.polygon().name().to_string(),
        matrix: session.matrix().name().to_string(),
        frame: session.frame(limits),
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, leaving stdout for the report
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = log_filter(directives.as_deref());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Filter for the given `RUST_LOG` directives, `info` when unset or invalid
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
