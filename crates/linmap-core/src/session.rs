//! Selection state and the operations a front end drives.
//!
//! A [`Session`] owns both loaded collections, the selected polygon, matrix
//! and base point, and the two derived outlines. Every mutating method
//! recomputes `before` and `after` before returning, so the derived outlines
//! are never stale.

use serde::Serialize;

use crate::collection::NamedCollection;
use crate::error::{CoreError, GridIssue, Result};
use crate::grid::{BasePoint, PointSeries, TransformMatrix};
use crate::transform::{compute_before, compute_transformed, compute_transformed_again};
use crate::viewport::PlotLimits;

/// Name of the placeholder polygon used when `polygons.ini` yields nothing
pub const EMPTY_POLYGONS_NAME: &str = "Error: polygons.ini contains no valid polygons.  \
    Delete polygons.ini and restart the application to regenerate polygons.ini.";

/// Name of the placeholder matrix used when `matrices.ini` yields nothing
pub const EMPTY_MATRICES_NAME: &str = "Error: matrices.ini contains no valid matrices.  \
    Delete matrices.ini and restart the application to regenerate matrices.ini.";

/// Hand-edited matrix and base point, as typed into text entries.
#[derive(Debug, Clone, Default)]
pub struct MatrixEdit {
    /// Name to store the matrix under
    pub name: String,
    /// Entries `a b c d` of `[[a, b], [c, d]]`
    pub entries: [String; 4],
    /// Base point `x, y`
    pub base_point: [String; 2],
}

impl MatrixEdit {
    /// Pre-fill the entry text from a matrix and base point
    pub fn from_selection(matrix: &TransformMatrix, base_point: &BasePoint) -> Self {
        let [[a, b], [c, d]] = matrix.rows();
        Self {
            name: matrix.name().to_string(),
            entries: [a, b, c, d].map(|v| v.to_string()),
            base_point: [base_point.x().to_string(), base_point.y().to_string()],
        }
    }
}

/// What a front end draws: both outlines and the window half-width.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub before: PointSeries,
    pub after: PointSeries,
    pub axis_limit: f64,
}

/// The current selection plus the outlines derived from it.
#[derive(Debug, Clone)]
pub struct Session {
    polygons: NamedCollection<PointSeries>,
    matrices: NamedCollection<TransformMatrix>,
    polygon: PointSeries,
    matrix: TransformMatrix,
    base_point: BasePoint,
    before: PointSeries,
    after: PointSeries,
}

impl Session {
    /// Start on the first polygon and first matrix of each collection.
    ///
    /// An empty collection receives a placeholder entry whose name tells the
    /// user how to regenerate the definition file.
    pub fn new(
        mut polygons: NamedCollection<PointSeries>,
        mut matrices: NamedCollection<TransformMatrix>,
        base_point: BasePoint,
    ) -> Self {
        let polygon = match polygons.first() {
            Some((_, polygon)) => polygon.clone(),
            None => {
                tracing::warn!("no valid polygons loaded, using placeholder");
                let placeholder =
                    PointSeries::new(EMPTY_POLYGONS_NAME, vec![1.0, 0.0], vec![0.0, 1.0]);
                polygons.add(placeholder.clone());
                placeholder
            }
        };

        let matrix = match matrices.first() {
            Some((_, matrix)) => matrix.clone(),
            None => {
                tracing::warn!("no valid matrices loaded, using placeholder");
                let placeholder = TransformMatrix::identity(EMPTY_MATRICES_NAME);
                matrices.add(placeholder.clone());
                placeholder
            }
        };

        let before = compute_before(&polygon, &base_point);
        let after = compute_transformed(&matrix, &before);
        Self {
            polygons,
            matrices,
            polygon,
            matrix,
            base_point,
            before,
            after,
        }
    }

    fn refresh(&mut self) {
        self.before = compute_before(&self.polygon, &self.base_point);
        self.after = compute_transformed(&self.matrix, &self.before);
    }

    pub fn list_polygons(&self) -> Vec<&str> {
        self.polygons.names().collect()
    }

    pub fn list_matrices(&self) -> Vec<&str> {
        self.matrices.names().collect()
    }

    pub fn polygons(&self) -> &NamedCollection<PointSeries> {
        &self.polygons
    }

    pub fn matrices(&self) -> &NamedCollection<TransformMatrix> {
        &self.matrices
    }

    pub fn polygon(&self) -> &PointSeries {
        &self.polygon
    }

    pub fn matrix(&self) -> &TransformMatrix {
        &self.matrix
    }

    pub fn base_point(&self) -> &BasePoint {
        &self.base_point
    }

    /// Untransformed outline, shifted by the base point
    pub fn before(&self) -> &PointSeries {
        &self.before
    }

    /// Transformed outline
    pub fn after(&self) -> &PointSeries {
        &self.after
    }

    /// Select a loaded polygon by display name.
    pub fn select_polygon(&mut self, name: &str) -> Result<()> {
        let polygon = self
            .polygons
            .get(name)
            .ok_or_else(|| CoreError::UnknownPolygon {
                name: name.to_string(),
            })?;
        self.polygon = polygon.clone();
        tracing::debug!(polygon = name, "polygon selected");
        self.refresh();
        Ok(())
    }

    /// Select a loaded matrix by display name.
    pub fn select_matrix(&mut self, name: &str) -> Result<()> {
        let matrix = self
            .matrices
            .get(name)
            .ok_or_else(|| CoreError::UnknownMatrix {
                name: name.to_string(),
            })?;
        self.matrix = matrix.clone();
        tracing::debug!(matrix = name, "matrix selected");
        self.refresh();
        Ok(())
    }

    pub fn set_base_point(&mut self, base_point: BasePoint) {
        self.base_point = base_point;
        self.refresh();
    }

    pub fn add_polygon(&mut self, polygon: PointSeries) {
        self.polygons.add(polygon);
    }

    pub fn add_matrix(&mut self, matrix: TransformMatrix) {
        self.matrices.add(matrix);
    }

    /// Commit a hand-edited matrix and base point.
    ///
    /// Unreadable entries fall back (matrix row 0 to `0`, row 1 to `1`, base
    /// point to the origin) and mark the matrix name. A matrix under a name
    /// not yet loaded is added to the collection; an existing entry of that
    /// name is left untouched. Either way the edited matrix becomes the
    /// selection.
    pub fn commit_edits(&mut self, edit: &MatrixEdit) {
        let mut issues = Vec::new();

        let [x, y] = &edit.base_point;
        let base_point = BasePoint::parse(x, y);
        if !base_point.is_valid() {
            issues.push(GridIssue::NonNumericBasePoint);
        }

        let mut entry_failed = false;
        let mut values = [0.0; 4];
        for (i, text) in edit.entries.iter().enumerate() {
            values[i] = text.trim().parse::<f64>().unwrap_or_else(|_| {
                entry_failed = true;
                if i < 2 { 0.0 } else { 1.0 }
            });
        }
        if entry_failed {
            issues.push(GridIssue::NonNumericEntry);
        }

        let matrix = issues.into_iter().fold(
            TransformMatrix::from_row_major(edit.name.as_str(), values),
            TransformMatrix::with_issue,
        );

        if !self.matrices.contains(matrix.name()) {
            tracing::info!(matrix = matrix.name(), "adding edited matrix");
            self.matrices.add(matrix.clone());
        }
        self.matrix = matrix;
        self.base_point = base_point;
        self.refresh();
    }

    /// Apply the matrix once more to the current `after` outline.
    pub fn transform_again(&mut self) -> &PointSeries {
        self.after = compute_transformed_again(&self.matrix, &self.after);
        &self.after
    }

    /// Snapshot of what should be drawn
    pub fn frame(&self, limits: &PlotLimits) -> Frame {
        Frame {
            before: self.before.clone(),
            after: self.after.clone(),
            axis_limit: limits.axis_limit([&self.before, &self.after]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let polygons = [
            PointSeries::new("line", vec![0.0, 1.7, 0.0], vec![0.0, 0.3, 0.0]),
            PointSeries::new("square", vec![0.0, 1.0, 1.0, 0.0, 0.0], vec![0.0, 0.0, 1.0, 1.0, 0.0]),
        ]
        .into_iter()
        .collect();
        let matrices = [
            TransformMatrix::from_row_major("default", [0.0, 1.0, -1.0, 0.0]),
            TransformMatrix::from_row_major("double", [2.0, 0.0, 0.0, 2.0]),
        ]
        .into_iter()
        .collect();
        Session::new(polygons, matrices, BasePoint::origin())
    }

    fn edit(name: &str, entries: [&str; 4], base: [&str; 2]) -> MatrixEdit {
        MatrixEdit {
            name: name.to_string(),
            entries: entries.map(String::from),
            base_point: base.map(String::from),
        }
    }

    #[test]
    fn test_starts_on_first_entries() {
        let s = session();
        assert_eq!(s.polygon().name(), "line");
        assert_eq!(s.matrix().name(), "default");
        assert_eq!(s.after().xs(), &[0.0, 0.3, 0.0]);
    }

    #[test]
    fn test_empty_collections_get_placeholders() {
        let s = Session::new(NamedCollection::new(), NamedCollection::new(), BasePoint::origin());
        assert_eq!(s.list_polygons(), vec![EMPTY_POLYGONS_NAME]);
        assert_eq!(s.list_matrices(), vec![EMPTY_MATRICES_NAME]);
        assert_eq!(s.matrix().rows(), [[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(s.polygon().xs(), &[1.0, 0.0]);
    }

    #[test]
    fn test_selection_recomputes() {
        let mut s = session();
        s.select_polygon("square").unwrap();
        s.select_matrix("double").unwrap();
        s.set_base_point(BasePoint::at(1.0, 0.0));
        assert_eq!(s.before().xs(), &[1.0, 2.0, 2.0, 1.0, 1.0]);
        assert_eq!(s.after().xs(), &[2.0, 4.0, 4.0, 2.0, 2.0]);
    }

    #[test]
    fn test_unknown_selection_is_error() {
        let mut s = session();
        assert_eq!(
            s.select_polygon("hexagon"),
            Err(CoreError::UnknownPolygon {
                name: "hexagon".to_string()
            })
        );
        assert!(s.select_matrix("shear").is_err());
        assert_eq!(s.polygon().name(), "line");
    }

    #[test]
    fn test_commit_adds_new_matrix() {
        let mut s = session();
        s.commit_edits(&edit("shear", ["1", "1", "0", "1"], ["0.5", "0"]));
        assert_eq!(s.list_matrices(), vec!["default", "double", "shear"]);
        assert_eq!(s.matrix().rows(), [[1.0, 1.0], [0.0, 1.0]]);
        assert_eq!(s.base_point().x(), 0.5);
        assert_eq!(s.before().xs()[0], 0.5);
    }

    #[test]
    fn test_commit_existing_name_keeps_collection_entry() {
        let mut s = session();
        s.commit_edits(&edit("double", ["3", "0", "0", "3"], ["0", "0"]));
        assert_eq!(s.matrix().rows(), [[3.0, 0.0], [0.0, 3.0]]);
        assert_eq!(
            s.matrices().get("double").map(|m| m.rows()),
            Some([[2.0, 0.0], [0.0, 2.0]])
        );
    }

    #[test]
    fn test_commit_non_numeric_entries() {
        let mut s = session();
        s.commit_edits(&edit("typo", ["x", "2", "3", "y"], ["a", "1"]));
        assert_eq!(s.matrix().rows(), [[0.0, 2.0], [3.0, 1.0]]);
        assert_eq!(s.base_point().to_vec2(), glam::DVec2::ZERO);
        assert_eq!(
            s.matrix().issues(),
            &[GridIssue::NonNumericBasePoint, GridIssue::NonNumericEntry]
        );
        assert!(s.matrix().name().starts_with("typo Error: a base point entry was non-numeric."));
    }

    #[test]
    fn test_transform_again() {
        let mut s = session();
        s.select_matrix("double").unwrap();
        s.transform_again();
        assert_eq!(s.after().xs(), &[0.0, 1.7 * 4.0, 0.0]);
    }

    #[test]
    fn test_edit_prefill_round_trips() {
        let mut s = session();
        let prefill = MatrixEdit::from_selection(s.matrix(), s.base_point());
        s.commit_edits(&prefill);
        assert_eq!(s.matrix().rows(), [[0.0, 1.0], [-1.0, 0.0]]);
        assert_eq!(s.list_matrices().len(), 2);
    }
}
