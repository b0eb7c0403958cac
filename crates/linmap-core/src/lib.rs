//! # linmap Core
//!
//! Named point grids and the transform pipeline for linmap.
//! Provides the grid model for polygons, matrices and base points, ordered
//! name-keyed collections, the `before`/`after` computation and the
//! caller-owned selection session.

pub mod collection;
pub mod error;
pub mod grid;
pub mod session;
pub mod transform;
pub mod viewport;

pub use collection::NamedCollection;
pub use error::{CoreError, GridIssue, RecordKind, Result};
pub use grid::{
    BasePoint, Column, GridShape, NamedGrid, Outline, PointSeries, Square, TransformMatrix,
};
pub use session::{Frame, MatrixEdit, Session};
pub use transform::{compute_before, compute_transformed, compute_transformed_again};
pub use viewport::{Bounds, PlotLimits};
