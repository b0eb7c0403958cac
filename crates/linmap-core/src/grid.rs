//! Named numeric grids
//!
//! Polygons, matrices and base points are all stored as a two-row grid of
//! `f64` values (an x row and a y row) with a display name. What differs is
//! the shape each one must have, which is expressed by a zero-sized marker
//! type implementing [`GridShape`]:
//!
//! | Alias             | Marker      | Columns | Fallback            |
//! |-------------------|-------------|---------|---------------------|
//! | [`PointSeries`]   | [`Outline`] | any     | two points at 0,0   |
//! | [`TransformMatrix`] | [`Square`] | 2      | identity            |
//! | [`BasePoint`]     | [`Column`]  | 1       | the origin          |
//!
//! Construction never fails. A grid that does not fit its shape is replaced
//! by the fallback and the reason is recorded both as a [`GridIssue`] and as
//! text appended to the display name, which is what a user sees in a menu.

use std::marker::PhantomData;

use glam::{DMat2, DVec2};
use serde::Serialize;

use crate::error::GridIssue;

/// Shape rule for a [`NamedGrid`]
pub trait GridShape {
    /// The issue a grid with `columns` columns violates, if any
    fn check(columns: usize) -> Option<GridIssue>;

    /// Rows used in place of rejected input
    fn fallback() -> (Vec<f64>, Vec<f64>);
}

/// Vertex outline of any length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline;

/// Dense 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square;

/// Single 2x1 column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column;

impl GridShape for Outline {
    fn check(_columns: usize) -> Option<GridIssue> {
        None
    }

    fn fallback() -> (Vec<f64>, Vec<f64>) {
        (vec![0.0, 0.0], vec![0.0, 0.0])
    }
}

impl GridShape for Square {
    fn check(columns: usize) -> Option<GridIssue> {
        (columns != 2).then_some(GridIssue::NotSquare)
    }

    fn fallback() -> (Vec<f64>, Vec<f64>) {
        (vec![1.0, 0.0], vec![0.0, 1.0])
    }
}

impl GridShape for Column {
    fn check(columns: usize) -> Option<GridIssue> {
        (columns != 1).then_some(GridIssue::NotColumn)
    }

    fn fallback() -> (Vec<f64>, Vec<f64>) {
        (vec![0.0], vec![0.0])
    }
}

/// A named two-row grid whose shape is fixed by `K`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct NamedGrid<K> {
    name: String,
    /// Length of the leading part of `name` that precedes appended issue text
    #[serde(skip)]
    base_len: usize,
    xs: Vec<f64>,
    ys: Vec<f64>,
    issues: Vec<GridIssue>,
    #[serde(skip)]
    shape: PhantomData<K>,
}

/// Polygon outline, vertices joined in order
pub type PointSeries = NamedGrid<Outline>;

/// 2x2 matrix stored row-major as `[[a, b], [c, d]]`
pub type TransformMatrix = NamedGrid<Square>;

/// Translation offset stored as a single column
pub type BasePoint = NamedGrid<Column>;

impl<K: GridShape> NamedGrid<K> {
    /// Build a grid from its x row and y row, falling back on bad input.
    pub fn new(name: impl Into<String>, xs: Vec<f64>, ys: Vec<f64>) -> Self {
        let name = name.into();
        let mut grid = Self {
            base_len: name.len(),
            name,
            xs,
            ys,
            issues: Vec::new(),
            shape: PhantomData,
        };
        if grid.name.is_empty() {
            grid.push_issue(GridIssue::MissingName);
        }

        if grid.xs.len() != grid.ys.len() {
            let issue = GridIssue::LengthMismatch {
                x_len: grid.xs.len(),
                y_len: grid.ys.len(),
            };
            grid.replace_with_fallback(issue);
        } else if let Some(issue) = K::check(grid.xs.len()) {
            grid.replace_with_fallback(issue);
        }
        grid
    }

    /// Build the fallback grid for a record whose data could not be read.
    pub fn degraded(name: impl Into<String>, issue: GridIssue) -> Self {
        let (xs, ys) = K::fallback();
        Self::new(name, xs, ys).with_issue(issue)
    }

    /// Record an issue found outside the grid, appending it to the name.
    pub fn with_issue(mut self, issue: GridIssue) -> Self {
        self.push_issue(issue);
        self
    }

    fn replace_with_fallback(&mut self, issue: GridIssue) {
        tracing::debug!(name = %self.name, %issue, "grid replaced by fallback shape");
        let (xs, ys) = K::fallback();
        self.xs = xs;
        self.ys = ys;
        self.push_issue(issue);
    }

    fn push_issue(&mut self, issue: GridIssue) {
        if issue.is_sentinel_name() {
            let sentinel = issue.to_string();
            self.name.replace_range(..self.base_len, &sentinel);
            self.base_len = sentinel.len();
        } else {
            self.name.push_str(&issue.to_string());
        }
        self.issues.push(issue);
    }
}

impl<K> NamedGrid<K> {
    /// Display name, including any appended error text
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The x row
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The y row
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Columns as 2-D vectors
    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| DVec2::new(x, y))
    }

    /// Every issue recovered from while building this grid
    pub fn issues(&self) -> &[GridIssue] {
        &self.issues
    }

    /// The first issue, if any
    pub fn validation_error(&self) -> Option<&GridIssue> {
        self.issues.first()
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

impl PointSeries {
    /// Collect an outline from points that are already known to be well formed.
    pub fn from_points(name: impl Into<String>, points: impl IntoIterator<Item = DVec2>) -> Self {
        let (xs, ys) = points.into_iter().map(|p| (p.x, p.y)).unzip();
        Self::new(name, xs, ys)
    }
}

impl TransformMatrix {
    /// The identity matrix
    pub fn identity(name: impl Into<String>) -> Self {
        Self::from_row_major(name, [1.0, 0.0, 0.0, 1.0])
    }

    /// Build `[[a, b], [c, d]]` from `[a, b, c, d]`.
    pub fn from_row_major(name: impl Into<String>, [a, b, c, d]: [f64; 4]) -> Self {
        Self::new(name, vec![a, b], vec![c, d])
    }

    /// Entries as rows
    pub fn rows(&self) -> [[f64; 2]; 2] {
        [[self.xs[0], self.xs[1]], [self.ys[0], self.ys[1]]]
    }

    /// The matrix in glam's column-major form
    pub fn to_mat2(&self) -> DMat2 {
        let [[a, b], [c, d]] = self.rows();
        DMat2::from_cols(DVec2::new(a, c), DVec2::new(b, d))
    }
}

impl BasePoint {
    /// Label used for every base point
    pub const NAME: &'static str = "base point";

    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Self::NAME, vec![x], vec![y])
    }

    pub fn origin() -> Self {
        Self::at(0.0, 0.0)
    }

    /// Read a base point from two text entries; non-numeric input gives the
    /// origin with a [`GridIssue::NonNumericBasePoint`] issue.
    pub fn parse(x: &str, y: &str) -> Self {
        match (x.trim().parse::<f64>(), y.trim().parse::<f64>()) {
            (Ok(x), Ok(y)) => Self::at(x, y),
            _ => Self::origin().with_issue(GridIssue::NonNumericBasePoint),
        }
    }

    pub fn x(&self) -> f64 {
        self.xs[0]
    }

    pub fn y(&self) -> f64 {
        self.ys[0]
    }

    pub fn to_vec2(&self) -> DVec2 {
        DVec2::new(self.x(), self.y())
    }
}

impl Default for BasePoint {
    fn default() -> Self {
        Self::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_keeps_equal_rows() {
        let square = PointSeries::new("square", vec![0.0, 1.0, 1.0], vec![0.0, 0.0, 1.0]);
        assert!(square.is_valid());
        assert_eq!(square.name(), "square");
        assert_eq!(square.len(), 3);
        assert_eq!(square.validation_error(), None);
    }

    #[test]
    fn test_polygon_length_mismatch_is_degenerate() {
        let bad = PointSeries::new("bad", vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(bad.xs(), &[0.0, 0.0]);
        assert_eq!(bad.ys(), &[0.0, 0.0]);
        assert_eq!(
            bad.validation_error(),
            Some(&GridIssue::LengthMismatch { x_len: 3, y_len: 4 })
        );
        assert!(bad.name().starts_with("bad Error:"));
    }

    #[test]
    fn test_empty_name_gets_sentinel() {
        let grid = PointSeries::new("", vec![1.0], vec![2.0]);
        assert_eq!(grid.name(), "MissingNo Error: missing name. ");
        assert_eq!(grid.xs(), &[1.0]);
        assert_eq!(grid.issues(), &[GridIssue::MissingName]);
    }

    #[test]
    fn test_sentinel_keeps_later_suffixes() {
        let m = TransformMatrix::new("", vec![1.0], vec![2.0]);
        assert_eq!(
            m.name(),
            "MissingNo Error: missing name.  Error: matrix was not size 2x2. "
        );

        let m = TransformMatrix::degraded("placeholder", GridIssue::WrongEntryCount { found: 2 })
            .with_issue(GridIssue::MalformedName {
                record: crate::error::RecordKind::Matrix,
            });
        assert!(m
            .name()
            .starts_with("MissingNo Error: this matrix was given an incorrectly formatted name.  Error: this matrix was given 2 entries"));
    }

    #[test]
    fn test_outline_accepts_any_length() {
        assert_eq!(Outline::check(0), None);
        assert_eq!(Outline::check(17), None);
        assert_eq!(Square::check(3), Some(GridIssue::NotSquare));
        assert_eq!(Column::check(1), None);
    }

    #[test]
    fn test_matrix_wrong_shape_is_identity() {
        let m = TransformMatrix::new("wide", vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]);
        assert_eq!(m.rows(), [[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(m.issues(), &[GridIssue::NotSquare]);
        assert_eq!(m.name(), "wide Error: matrix was not size 2x2. ");
    }

    #[test]
    fn test_matrix_row_mismatch_is_identity() {
        let m = TransformMatrix::new("ragged", vec![1.0, 2.0], vec![3.0]);
        assert_eq!(m.rows(), [[1.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn test_matrix_row_major_layout() {
        let m = TransformMatrix::from_row_major("m", [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.rows(), [[1.0, 2.0], [3.0, 4.0]]);
        let v = m.to_mat2() * DVec2::new(1.0, 0.0);
        assert_eq!(v, DVec2::new(1.0, 3.0));
    }

    #[test]
    fn test_base_point_parse() {
        let p = BasePoint::parse("1.5", " -2 ");
        assert_eq!(p.to_vec2(), DVec2::new(1.5, -2.0));
        assert!(p.is_valid());

        let p = BasePoint::parse("one", "2");
        assert_eq!(p.to_vec2(), DVec2::ZERO);
        assert_eq!(p.issues(), &[GridIssue::NonNumericBasePoint]);
    }

    #[test]
    fn test_base_point_wrong_shape_is_origin() {
        let p = BasePoint::new("pair", vec![1.0, 2.0], vec![3.0, 4.0]);
        assert_eq!(p.to_vec2(), DVec2::ZERO);
        assert_eq!(p.issues(), &[GridIssue::NotColumn]);
    }

    #[test]
    fn test_degraded_appends_issue() {
        let m = TransformMatrix::degraded(
            "broken",
            GridIssue::WrongEntryCount { found: 3 },
        );
        assert_eq!(m.rows(), [[1.0, 0.0], [0.0, 1.0]]);
        assert!(m.name().starts_with("broken Error: this matrix was given 3 entries"));
    }
}
