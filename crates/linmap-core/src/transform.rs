//! Transform pipeline
//!
//! `before = polygon + base point`, then `after = M · before`. Applying `M`
//! again to `after` walks the orbit `M^k · v` of every vertex.
//!
//! These are plain functions of their inputs; the session calls them whenever
//! its selection changes.

use crate::grid::{BasePoint, PointSeries, TransformMatrix};

/// Legend label of the untransformed outline
pub const BEFORE_LABEL: &str = "before";

/// Legend label of the transformed outline
pub const AFTER_LABEL: &str = "after";

/// Shift every vertex of `polygon` by the base point.
pub fn compute_before(polygon: &PointSeries, base_point: &BasePoint) -> PointSeries {
    let offset = base_point.to_vec2();
    PointSeries::from_points(BEFORE_LABEL, polygon.points().map(|p| p + offset))
}

/// Left-multiply every vertex of `before` by `matrix`.
pub fn compute_transformed(matrix: &TransformMatrix, before: &PointSeries) -> PointSeries {
    apply(matrix, before)
}

/// Apply `matrix` once more to an already transformed outline.
pub fn compute_transformed_again(matrix: &TransformMatrix, after: &PointSeries) -> PointSeries {
    apply(matrix, after)
}

fn apply(matrix: &TransformMatrix, series: &PointSeries) -> PointSeries {
    let m = matrix.to_mat2();
    PointSeries::from_points(AFTER_LABEL, series.points().map(|p| m * p))
}
