//! Error handling for linmap
//!
//! Two families of errors live here:
//! - [`GridIssue`]: problems found while building a grid. These are never
//!   propagated; the grid falls back to a safe shape and the issue text is
//!   appended to its display name.
//! - [`CoreError`]: failures of session operations, returned to the caller.
//!
//! All error types use `thiserror` for ergonomic error handling.

use serde::Serialize;
use thiserror::Error;

/// Which definition file a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// A record of `polygons.ini`
    Polygon,
    /// A record of `matrices.ini`
    Matrix,
}

impl RecordKind {
    /// File name the record kind is stored in
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Polygon => "polygons.ini",
            Self::Matrix => "matrices.ini",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Polygon => write!(f, "polygon"),
            Self::Matrix => write!(f, "matrix"),
        }
    }
}

/// Recoverable problem recorded on a grid.
///
/// The `Display` text is exactly what gets appended to the grid's display
/// name, so the sentinel-name variants render as a full name and the rest
/// render with a leading space.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridIssue {
    /// A grid was built without a name
    #[error("MissingNo Error: missing name. ")]
    MissingName,

    /// A `name:` marker line had nothing after the colon
    #[error("MissingNo Error: this {record} was given an incorrectly formatted name. ")]
    MalformedName {
        /// The kind of record that lacked a name.
        record: RecordKind,
    },

    /// A data line was missing or held a non-numeric token
    #[error(" Error: the numerical data for this {record} was incorrectly formatted in {}.", .record.file_name())]
    MalformedNumeric {
        /// The kind of record with the bad data line.
        record: RecordKind,
    },

    /// A matrix data line did not hold exactly four numbers
    #[error(" Error: this matrix was given {found} entries in matrices.ini instead of 4. ")]
    WrongEntryCount {
        /// The number of tokens found on the data line.
        found: usize,
    },

    /// The x and y rows of a grid have different lengths
    #[error(" Error: coordinate value lists have different lengths. ")]
    LengthMismatch {
        /// Length of the x row.
        x_len: usize,
        /// Length of the y row.
        y_len: usize,
    },

    /// A matrix grid did not have two columns
    #[error(" Error: matrix was not size 2x2. ")]
    NotSquare,

    /// A base point grid did not have exactly one column
    #[error(" Error: base point did not have two coordinates. ")]
    NotColumn,

    /// A hand-edited matrix entry could not be read as a number
    #[error(" Error: a matrix entry was non-numeric. ")]
    NonNumericEntry,

    /// A hand-edited base point coordinate could not be read as a number
    #[error(" Error: a base point entry was non-numeric. ")]
    NonNumericBasePoint,
}

impl GridIssue {
    /// Whether this issue replaces the display name instead of extending it
    pub fn is_sentinel_name(&self) -> bool {
        matches!(self, Self::MissingName | Self::MalformedName { .. })
    }
}

/// Session error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No polygon with that name is loaded
    #[error("Unknown polygon: {name}")]
    UnknownPolygon {
        /// The requested polygon name.
        name: String,
    },

    /// No matrix with that name is loaded
    #[error("Unknown matrix: {name}")]
    UnknownMatrix {
        /// The requested matrix name.
        name: String,
    },
}

/// Result type using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
